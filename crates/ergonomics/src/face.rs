//! Face signals: blinks, head tilt and screen distance

use crate::state::BlinkState;
use crate::AnalysisConfig;
use landmarks::{Eye, FaceFrame, LandmarkPoint};
use serde::{Deserialize, Serialize};
use smoothing::{SmoothingWindow, Status};
use tracing::{debug, info};

/// Eye aspect ratio of one eye, given its p1..p6 landmarks.
///
/// `(|p2-p6| + |p3-p5|) / (2 |p1-p4|)`, or 0 when the eye corners coincide.
pub fn eye_aspect_ratio(eye: &[LandmarkPoint; 6]) -> f64 {
    let [p1, p2, p3, p4, p5, p6] = eye;
    let horizontal = p1.distance(p4);
    if horizontal == 0.0 {
        return 0.0;
    }
    (p2.distance(p6) + p3.distance(p5)) / (2.0 * horizontal)
}

/// Raw measurements taken from one face frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceMeasurement {
    /// Mean EAR of both eyes
    pub ear: f64,
    /// Vertical offset between the eye corners
    pub tilt: f64,
    /// Distance between the eye corners
    pub eye_distance: f64,
}

impl FaceMeasurement {
    pub fn measure(frame: &FaceFrame) -> Self {
        let left = eye_aspect_ratio(&frame.eye(Eye::Left));
        let right = eye_aspect_ratio(&frame.eye(Eye::Right));
        let (a, b) = frame.eye_corners();

        Self {
            ear: (left + right) / 2.0,
            tilt: (a.y - b.y).abs(),
            eye_distance: a.distance(&b),
        }
    }
}

/// Statuses after feeding a face frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceStatus {
    pub tilt: Status,
    pub distance: Status,
    pub blinks: u64,
}

/// Blink counter plus smoothed tilt and distance trackers
#[derive(Debug, Clone)]
pub struct FaceAnalyzer {
    blink: BlinkState,
    tilt: SmoothingWindow,
    distance: SmoothingWindow,
}

impl FaceAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            blink: BlinkState::new(),
            tilt: SmoothingWindow::new(config.smoothing_window),
            distance: SmoothingWindow::new(config.smoothing_window),
        }
    }

    /// Feed one face frame into all three signals
    pub fn update(&mut self, frame: &FaceFrame, config: &AnalysisConfig) -> FaceStatus {
        let m = FaceMeasurement::measure(frame);
        debug!(
            "EAR: {:.3}, tilt: {:.4}, eye distance: {:.3}",
            m.ear, m.tilt, m.eye_distance
        );

        if self
            .blink
            .update(m.ear, config.ear_threshold, config.blink_frame_count)
        {
            info!("Blink detected (total {})", self.blink.blinks());
        }

        self.tilt.push(m.tilt <= config.head_tilt_threshold);

        // Eye corners spread apart as the face nears the camera
        self.distance.push(m.eye_distance <= config.distance_threshold_max);

        self.status(config)
    }

    pub fn status(&self, config: &AnalysisConfig) -> FaceStatus {
        FaceStatus {
            tilt: self.tilt.status_with(config.good_threshold),
            distance: self.distance.status_with(config.good_threshold),
            blinks: self.blink.blinks(),
        }
    }

    pub fn blink_state(&self) -> &BlinkState {
        &self.blink
    }

    pub fn reset(&mut self) {
        self.blink = BlinkState::new();
        self.tilt.clear();
        self.distance.clear();
    }
}
