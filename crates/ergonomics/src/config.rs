//! Analysis configuration

use crate::ErgonomicsError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Environment variable prefix for overrides (`ERGO_EAR_THRESHOLD=0.2`)
pub const ENV_PREFIX: &str = "ERGO";

/// Thresholds shared read-only by all analyzers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Nose-to-shoulder vertical gap below which posture is slouched
    pub slouch_threshold_vertical: f64,

    /// Nose-to-shoulder horizontal offset above which posture is leaning
    pub slouch_threshold_horizontal: f64,

    /// Number of recent judgments each smoothing window keeps
    pub smoothing_window: usize,

    /// Vertical offset between eye corners above which the head is tilted
    pub head_tilt_threshold: f64,

    /// Inter-eye-corner distance above which the face is too close
    pub distance_threshold_max: f64,

    /// Average eye aspect ratio below which eyes count as closed
    pub ear_threshold: f64,

    /// Minimum closed-eye run (frames) that counts as a blink
    pub blink_frame_count: u32,

    /// Pose landmarks must be strictly more visible than this
    pub visibility_threshold: f64,

    /// Minimum share of good judgments for a `Good` status
    pub good_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            slouch_threshold_vertical: 0.28,
            slouch_threshold_horizontal: 0.07,
            smoothing_window: 10,
            head_tilt_threshold: 0.015,
            distance_threshold_max: 0.2,
            ear_threshold: 0.21,
            blink_frame_count: 2,
            visibility_threshold: 0.6,
            good_threshold: smoothing::DEFAULT_GOOD_THRESHOLD,
        }
    }
}

impl AnalysisConfig {
    /// Create strict config (tighter posture and tilt tolerances)
    pub fn strict() -> Self {
        Self {
            slouch_threshold_vertical: 0.32,
            slouch_threshold_horizontal: 0.05,
            head_tilt_threshold: 0.01,
            distance_threshold_max: 0.18,
            ..Default::default()
        }
    }

    /// Create lenient config (looser posture and tilt tolerances)
    pub fn lenient() -> Self {
        Self {
            slouch_threshold_vertical: 0.22,
            slouch_threshold_horizontal: 0.1,
            head_tilt_threshold: 0.025,
            distance_threshold_max: 0.25,
            ..Default::default()
        }
    }

    /// Load defaults, then an optional file, then `ERGO_*` environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ErgonomicsError> {
        let defaults = config::Config::try_from(&Self::default())
            .map_err(|e| ErgonomicsError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            info!("Loading analysis config from {}", path.display());
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| ErgonomicsError::Config(e.to_string()))?;

        let loaded: Self = settings
            .try_deserialize()
            .map_err(|e| ErgonomicsError::Config(e.to_string()))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject thresholds the analyzers cannot work with
    pub fn validate(&self) -> Result<(), ErgonomicsError> {
        let thresholds = [
            ("slouch_threshold_vertical", self.slouch_threshold_vertical),
            ("slouch_threshold_horizontal", self.slouch_threshold_horizontal),
            ("head_tilt_threshold", self.head_tilt_threshold),
            ("distance_threshold_max", self.distance_threshold_max),
            ("ear_threshold", self.ear_threshold),
            ("visibility_threshold", self.visibility_threshold),
        ];

        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(ErgonomicsError::InvalidThreshold {
                    name,
                    value,
                });
            }
        }

        if !(self.good_threshold > 0.0 && self.good_threshold <= 1.0) {
            return Err(ErgonomicsError::InvalidThreshold {
                name: "good_threshold",
                value: self.good_threshold,
            });
        }

        if self.smoothing_window == 0 {
            return Err(ErgonomicsError::Config(
                "smoothing_window must hold at least one judgment".into(),
            ));
        }

        Ok(())
    }
}
