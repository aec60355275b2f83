//! Ergonomic Signal Analysis
//!
//! Per-frame analysis of a single subject in front of a camera:
//! - Posture (nose height and offset over the shoulders)
//! - Head tilt (eye corner alignment)
//! - Screen distance (eye corner spread)
//! - Blink counting (eye aspect ratio state machine)
//!
//! Landmarks come from an external detector; this crate only does geometry
//! and temporal smoothing.

pub mod analysis;
pub mod config;
pub mod face;
pub mod posture;
pub mod state;

pub use analysis::FrameReport;
pub use config::AnalysisConfig;
pub use face::{eye_aspect_ratio, FaceAnalyzer, FaceMeasurement, FaceStatus};
pub use posture::{PostureAnalyzer, PostureMeasurement};
pub use state::{BlinkState, EyePhase};

pub use landmarks::{FaceFrame, LandmarkError, LandmarkPoint, PoseFrame};
pub use smoothing::Status;

use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Ergonomics error types
#[derive(Error, Debug)]
pub enum ErgonomicsError {
    #[error(transparent)]
    Landmark(#[from] LandmarkError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid threshold {name}: {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
}

/// Analysis session for one subject
///
/// Owns every piece of rolling state. Each tick builds a fresh report and
/// then swaps it in as the latest one, so readers never see a half-built report.
pub struct Session {
    config: Arc<AnalysisConfig>,
    posture: PostureAnalyzer,
    face: FaceAnalyzer,
    latest: Arc<FrameReport>,
    ticks: u64,
}

impl Session {
    /// Create a new session with configuration
    pub fn new(config: AnalysisConfig) -> Result<Self, ErgonomicsError> {
        Self::with_shared_config(Arc::new(config))
    }

    /// Create a session sharing an already loaded configuration
    pub fn with_shared_config(config: Arc<AnalysisConfig>) -> Result<Self, ErgonomicsError> {
        config.validate()?;
        info!(
            "Creating analysis session (window {}, EAR threshold {})",
            config.smoothing_window, config.ear_threshold
        );
        Ok(Self {
            posture: PostureAnalyzer::new(&config),
            face: FaceAnalyzer::new(&config),
            latest: Arc::new(FrameReport::default()),
            ticks: 0,
            config,
        })
    }

    /// Process one tick's landmarks. Either frame may be missing when the
    /// detector found nothing; the matching signals then keep their last status.
    pub fn tick(&mut self, pose: Option<&PoseFrame>, face: Option<&FaceFrame>) -> Arc<FrameReport> {
        let config = &*self.config;

        let posture = match pose {
            Some(frame) => self.posture.update(frame, config),
            None => self.posture.status(config),
        };

        let face_status = match face {
            Some(frame) => self.face.update(frame, config),
            None => self.face.status(config),
        };

        let report = Arc::new(FrameReport {
            posture,
            tilt: face_status.tilt,
            distance: face_status.distance,
            blink: face_status.blinks,
        });

        self.ticks += 1;
        self.latest = Arc::clone(&report);
        report
    }

    /// Last committed report, without recomputation
    pub fn latest(&self) -> Arc<FrameReport> {
        Arc::clone(&self.latest)
    }

    /// Blinks counted so far
    pub fn blink_count(&self) -> u64 {
        self.face.blink_state().blinks()
    }

    /// Ticks processed so far
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &Arc<AnalysisConfig> {
        &self.config
    }

    pub fn posture(&self) -> &PostureAnalyzer {
        &self.posture
    }

    pub fn face(&self) -> &FaceAnalyzer {
        &self.face
    }

    /// Reset all rolling state (new subject)
    pub fn reset(&mut self) {
        info!("Resetting analysis session after {} ticks", self.ticks);
        self.posture.reset();
        self.face.reset();
        self.latest = Arc::new(FrameReport::default());
        self.ticks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalysisConfig {
            smoothing_window: 0,
            ..Default::default()
        };
        assert!(Session::new(config).is_err());
    }

    #[test]
    fn test_empty_tick_keeps_unknown() {
        let mut session = Session::new(AnalysisConfig::default()).unwrap();
        let report = session.tick(None, None);
        assert_eq!(*report, FrameReport::default());
        assert_eq!(session.tick_count(), 1);
        assert_eq!(*session.latest(), *report);
    }

    #[test]
    fn test_error_messages() {
        let err: ErgonomicsError = LandmarkError::InvalidFrameShape {
            kind: "face mesh",
            expected: 468,
            actual: 12,
        }
        .into();
        assert!(err.to_string().contains("invalid landmark frame shape"));
    }
}
