//! Blink state tracking

use serde::{Deserialize, Serialize};

/// Eye phase derived from the averaged eye aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EyePhase {
    #[default]
    Open,
    Closing,
}

/// Blink counter (tracked over the whole session)
#[derive(Debug, Clone, Default)]
pub struct BlinkState {
    /// Completed blinks, never decreases
    blinks: u64,

    /// Consecutive frames with eyes closed
    closed_run: u32,
}

impl BlinkState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one averaged EAR sample. Returns true when a blink completes.
    ///
    /// A closed run only counts once the eyes reopen, and only if it lasted
    /// at least `min_closed_frames`. The run resets on every reopening.
    pub fn update(&mut self, avg_ear: f64, ear_threshold: f64, min_closed_frames: u32) -> bool {
        if avg_ear < ear_threshold {
            self.closed_run = self.closed_run.saturating_add(1);
            return false;
        }

        let completed = self.closed_run >= min_closed_frames && self.closed_run > 0;
        if completed {
            self.blinks += 1;
        }
        self.closed_run = 0;
        completed
    }

    /// Completed blinks so far
    pub fn blinks(&self) -> u64 {
        self.blinks
    }

    /// Length of the current closed-eye run
    pub fn closed_run(&self) -> u32 {
        self.closed_run
    }

    pub fn phase(&self) -> EyePhase {
        if self.closed_run > 0 {
            EyePhase::Closing
        } else {
            EyePhase::Open
        }
    }
}
