//! Judgment Smoothing
//!
//! Converts a noisy stream of per-frame good/bad judgments into a stable
//! categorical status by majority vote over the most recent samples.

mod window;

pub use window::{SmoothingWindow, DEFAULT_CAPACITY, DEFAULT_GOOD_THRESHOLD};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Smoothed status reported for a single signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Good judgments dominate the window
    Good,
    /// Too many bad judgments in the window
    Warning,
    /// No judgment has been recorded yet
    #[default]
    Unknown,
}

impl Status {
    /// Label used by presentation layers
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Good => "Good",
            Status::Warning => "Warning",
            Status::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
