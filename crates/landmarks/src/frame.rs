//! Per-tick landmark frames

use crate::index::{Eye, FaceLandmark, PoseLandmark, FACE_MESH_POINTS, POSE_POINTS};
use crate::{LandmarkError, LandmarkPoint};
use serde::{Deserialize, Serialize};

/// Pose landmarks needed for posture analysis, coordinate-checked at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoseFrame", into = "RawPoseFrame")]
pub struct PoseFrame {
    left_shoulder: LandmarkPoint,
    right_shoulder: LandmarkPoint,
    nose: LandmarkPoint,
}

/// Unchecked wire form of [`PoseFrame`]
#[derive(Serialize, Deserialize)]
struct RawPoseFrame {
    left_shoulder: LandmarkPoint,
    right_shoulder: LandmarkPoint,
    nose: LandmarkPoint,
}

impl PoseFrame {
    /// Reject frames whose nose or shoulders carry NaN or infinite coordinates
    pub fn new(
        left_shoulder: LandmarkPoint,
        right_shoulder: LandmarkPoint,
        nose: LandmarkPoint,
    ) -> Result<Self, LandmarkError> {
        let named = [
            (PoseLandmark::LeftShoulder, &left_shoulder),
            (PoseLandmark::RightShoulder, &right_shoulder),
            (PoseLandmark::Nose, &nose),
        ];
        for (landmark, p) in named {
            if !p.is_finite() {
                return Err(LandmarkError::InvalidCoordinate {
                    index: landmark.index(),
                    x: p.x,
                    y: p.y,
                });
            }
        }

        Ok(Self {
            left_shoulder,
            right_shoulder,
            nose,
        })
    }

    /// Pick the named landmarks out of a full pose detector output
    pub fn from_landmarks(points: &[LandmarkPoint]) -> Result<Self, LandmarkError> {
        if points.len() < POSE_POINTS {
            return Err(LandmarkError::InvalidFrameShape {
                kind: "pose",
                expected: POSE_POINTS,
                actual: points.len(),
            });
        }

        Self::new(
            points[PoseLandmark::LeftShoulder.index()],
            points[PoseLandmark::RightShoulder.index()],
            points[PoseLandmark::Nose.index()],
        )
    }

    pub fn left_shoulder(&self) -> LandmarkPoint {
        self.left_shoulder
    }

    pub fn right_shoulder(&self) -> LandmarkPoint {
        self.right_shoulder
    }

    pub fn nose(&self) -> LandmarkPoint {
        self.nose
    }

    /// Midpoint between the two shoulders
    pub fn shoulder_midpoint(&self) -> LandmarkPoint {
        self.left_shoulder.midpoint(&self.right_shoulder)
    }
}

impl TryFrom<RawPoseFrame> for PoseFrame {
    type Error = LandmarkError;

    fn try_from(raw: RawPoseFrame) -> Result<Self, Self::Error> {
        Self::new(raw.left_shoulder, raw.right_shoulder, raw.nose)
    }
}

impl From<PoseFrame> for RawPoseFrame {
    fn from(frame: PoseFrame) -> Self {
        Self {
            left_shoulder: frame.left_shoulder,
            right_shoulder: frame.right_shoulder,
            nose: frame.nose,
        }
    }
}

/// Full face-mesh output, shape-checked once at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LandmarkPoint>", into = "Vec<LandmarkPoint>")]
pub struct FaceFrame {
    points: Vec<LandmarkPoint>,
}

impl FaceFrame {
    /// Validate a detector output against the face-mesh layout
    pub fn new(points: Vec<LandmarkPoint>) -> Result<Self, LandmarkError> {
        if points.len() < FACE_MESH_POINTS {
            return Err(LandmarkError::InvalidFrameShape {
                kind: "face mesh",
                expected: FACE_MESH_POINTS,
                actual: points.len(),
            });
        }

        for landmark in FaceLandmark::ALL {
            let index = landmark.index();
            let p = &points[index];
            if !p.is_finite() {
                return Err(LandmarkError::InvalidCoordinate { index, x: p.x, y: p.y });
            }
        }

        Ok(Self { points })
    }

    /// Look up a named landmark
    pub fn point(&self, landmark: FaceLandmark) -> LandmarkPoint {
        // index < FACE_MESH_POINTS <= len, checked in `new`
        self.points[landmark.index()]
    }

    /// EAR sextet p1..p6 for one eye
    pub fn eye(&self, eye: Eye) -> [LandmarkPoint; 6] {
        eye.sextet().map(|landmark| self.point(landmark))
    }

    /// Outer corners of both eyes (right, left) used for tilt and distance
    pub fn eye_corners(&self) -> (LandmarkPoint, LandmarkPoint) {
        (
            self.point(FaceLandmark::RightEyeOuter),
            self.point(FaceLandmark::LeftEyeOuter),
        )
    }
}

impl TryFrom<Vec<LandmarkPoint>> for FaceFrame {
    type Error = LandmarkError;

    fn try_from(points: Vec<LandmarkPoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<FaceFrame> for Vec<LandmarkPoint> {
    fn from(frame: FaceFrame) -> Self {
        frame.points
    }
}
