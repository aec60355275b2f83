//! Landmark replay input
//!
//! One tick per line, as JSON:
//!
//! ```text
//! {"timestamp_ms": 0, "pose": {"left_shoulder": {...}, "right_shoulder": {...}, "nose": {...}}, "face": [{"x": 0.1, "y": 0.2}, ...]}
//! ```
//!
//! `pose` and `face` may be `null` or omitted when the detector found nothing.

use landmarks::{FaceFrame, PoseFrame};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Replay error types
#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Landmarks detected on one captured frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickRecord {
    /// Capture time relative to the start of the recording
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,

    #[serde(default)]
    pub pose: Option<PoseFrame>,

    #[serde(default)]
    pub face: Option<FaceFrame>,
}

impl TickRecord {
    /// Parse one input line (1-based `line` for error messages).
    /// Blank lines and `#` comments yield `None`.
    pub fn parse(line: usize, text: &str) -> Result<Option<Self>, ReplayError> {
        let text = text.trim();
        if text.is_empty() || text.starts_with('#') {
            return Ok(None);
        }

        serde_json::from_str(text)
            .map(Some)
            .map_err(|source| ReplayError::Parse { line, source })
    }
}
