//! Landmark point type and planar geometry

use serde::{Deserialize, Serialize};

/// Normalized 2D landmark (x, y usually in [0, 1])
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f64,
    pub y: f64,
    /// Detector confidence in [0, 1], if the model reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl LandmarkPoint {
    /// Create a point without a visibility score
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            visibility: None,
        }
    }

    /// Create a point carrying a visibility score
    pub fn with_visibility(x: f64, y: f64, visibility: f64) -> Self {
        Self {
            x,
            y,
            visibility: Some(visibility),
        }
    }

    /// Euclidean distance in normalized coordinate space
    pub fn distance(&self, other: &LandmarkPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Arithmetic mean of two points (visibility dropped)
    pub fn midpoint(&self, other: &LandmarkPoint) -> LandmarkPoint {
        LandmarkPoint::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// True if the point is visible with strictly more than `threshold` confidence.
    /// A point without a score never passes.
    pub fn is_visible(&self, threshold: f64) -> bool {
        self.visibility.is_some_and(|v| v > threshold)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
