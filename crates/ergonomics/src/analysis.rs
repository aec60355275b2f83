//! Combined per-tick report

use serde::{Deserialize, Serialize};
use smoothing::Status;

/// Statuses of all signals after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameReport {
    /// Smoothed posture status
    pub posture: Status,

    /// Smoothed head tilt status
    pub tilt: Status,

    /// Smoothed screen distance status
    pub distance: Status,

    /// Blinks counted this session (serialized as a string)
    #[serde(with = "blink_count")]
    pub blink: u64,
}

impl FrameReport {
    /// Check if any signal is in warning
    pub fn has_warnings(&self) -> bool {
        self.statuses().iter().any(|&(_, s)| s == Status::Warning)
    }

    /// Named statuses, in display order
    pub fn statuses(&self) -> [(&'static str, Status); 3] {
        [
            ("posture", self.posture),
            ("tilt", self.tilt),
            ("distance", self.distance),
        ]
    }
}

/// Blink count goes over the wire as a string but reads back from either form
mod blink_count {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(count: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(count)
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(u64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        }
    }
}
