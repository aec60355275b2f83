//! Landmark Frames
//!
//! Input types produced by an external pose / face-mesh detector:
//! - Normalized 2D landmark points with optional visibility
//! - Pose frames (nose and shoulders)
//! - Face-mesh frames validated against the expected mesh size
//! - Named lookup tables mapping semantic landmarks to mesh indices

mod error;
pub mod frame;
pub mod index;
pub mod point;

pub use error::LandmarkError;
pub use frame::{FaceFrame, PoseFrame};
pub use index::{Eye, FaceLandmark, PoseLandmark, FACE_MESH_POINTS, POSE_POINTS};
pub use point::LandmarkPoint;
