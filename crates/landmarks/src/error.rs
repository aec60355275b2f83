//! Landmark Error Types

use thiserror::Error;

/// Errors raised when a detector hands over a malformed frame
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LandmarkError {
    /// Frame does not contain the landmark set the indexing scheme expects
    #[error("invalid landmark frame shape: {kind} frame needs at least {expected} points, got {actual}")]
    InvalidFrameShape {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Coordinate is NaN or infinite
    #[error("invalid landmark coordinate at index {index}: ({x}, {y})")]
    InvalidCoordinate { index: usize, x: f64, y: f64 },
}
