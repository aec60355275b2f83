//! Posture analysis from nose and shoulder landmarks

use crate::AnalysisConfig;
use landmarks::PoseFrame;
use serde::{Deserialize, Serialize};
use smoothing::{SmoothingWindow, Status};
use tracing::debug;

/// Geometry measured on one pose frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostureMeasurement {
    /// |nose.y - shoulder_mid.y|
    pub vertical: f64,
    /// |nose.x - shoulder_mid.x|
    pub horizontal: f64,
    /// Slouching or leaning sideways
    pub bad: bool,
}

impl PostureMeasurement {
    /// Measure a pose frame. `None` when any of nose or shoulders is not
    /// confidently visible.
    pub fn measure(frame: &PoseFrame, config: &AnalysisConfig) -> Option<Self> {
        let gate = config.visibility_threshold;
        let nose = frame.nose();
        if !(frame.left_shoulder().is_visible(gate)
            && frame.right_shoulder().is_visible(gate)
            && nose.is_visible(gate))
        {
            return None;
        }

        let mid = frame.shoulder_midpoint();
        let vertical = (nose.y - mid.y).abs();
        let horizontal = (nose.x - mid.x).abs();

        // A small nose-to-shoulder gap means the head has dropped
        let bad = vertical < config.slouch_threshold_vertical
            || horizontal > config.slouch_threshold_horizontal;

        Some(Self {
            vertical,
            horizontal,
            bad,
        })
    }
}

/// Smoothed posture tracker
#[derive(Debug, Clone)]
pub struct PostureAnalyzer {
    window: SmoothingWindow,
}

impl PostureAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            window: SmoothingWindow::new(config.smoothing_window),
        }
    }

    /// Judge one frame and return the smoothed status.
    /// Gated frames leave the window untouched.
    pub fn update(&mut self, frame: &PoseFrame, config: &AnalysisConfig) -> Status {
        match PostureMeasurement::measure(frame, config) {
            Some(m) => {
                debug!(
                    "V_Dist: {:.2}, H_Dist: {:.2} -> posture {}",
                    m.vertical,
                    m.horizontal,
                    if m.bad { "BAD" } else { "GOOD" }
                );
                self.window.push(!m.bad);
            }
            None => debug!("Pose landmarks below visibility gate, keeping previous posture"),
        }
        self.status(config)
    }

    pub fn status(&self, config: &AnalysisConfig) -> Status {
        self.window.status_with(config.good_threshold)
    }

    pub fn window(&self) -> &SmoothingWindow {
        &self.window
    }

    pub fn reset(&mut self) {
        self.window.clear();
    }
}
