//! Landmark index tables
//!
//! Semantic names for the detector outputs the analyzers read. Indices
//! follow the BlazePose (33 points) and face-mesh (468 points) topologies.

/// Number of points in a pose frame
pub const POSE_POINTS: usize = 33;

/// Number of points in a face-mesh frame (refined meshes carry 478)
pub const FACE_MESH_POINTS: usize = 468;

/// Pose landmarks used for posture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoseLandmark {
    Nose,
    LeftShoulder,
    RightShoulder,
}

impl PoseLandmark {
    pub const fn index(self) -> usize {
        match self {
            PoseLandmark::Nose => 0,
            PoseLandmark::LeftShoulder => 11,
            PoseLandmark::RightShoulder => 12,
        }
    }
}

/// Face-mesh landmarks around both eyes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceLandmark {
    LeftEyeInner,
    LeftEyeUpperInner,
    LeftEyeUpperOuter,
    LeftEyeOuter,
    LeftEyeLowerOuter,
    LeftEyeLowerInner,
    RightEyeOuter,
    RightEyeUpperOuter,
    RightEyeUpperInner,
    RightEyeInner,
    RightEyeLowerInner,
    RightEyeLowerOuter,
}

impl FaceLandmark {
    pub const ALL: [FaceLandmark; 12] = [
        FaceLandmark::LeftEyeInner,
        FaceLandmark::LeftEyeUpperInner,
        FaceLandmark::LeftEyeUpperOuter,
        FaceLandmark::LeftEyeOuter,
        FaceLandmark::LeftEyeLowerOuter,
        FaceLandmark::LeftEyeLowerInner,
        FaceLandmark::RightEyeOuter,
        FaceLandmark::RightEyeUpperOuter,
        FaceLandmark::RightEyeUpperInner,
        FaceLandmark::RightEyeInner,
        FaceLandmark::RightEyeLowerInner,
        FaceLandmark::RightEyeLowerOuter,
    ];

    /// Position of the landmark in the face-mesh array
    pub const fn index(self) -> usize {
        match self {
            FaceLandmark::LeftEyeInner => 362,
            FaceLandmark::LeftEyeUpperInner => 385,
            FaceLandmark::LeftEyeUpperOuter => 387,
            FaceLandmark::LeftEyeOuter => 263,
            FaceLandmark::LeftEyeLowerOuter => 373,
            FaceLandmark::LeftEyeLowerInner => 380,
            FaceLandmark::RightEyeOuter => 33,
            FaceLandmark::RightEyeUpperOuter => 160,
            FaceLandmark::RightEyeUpperInner => 158,
            FaceLandmark::RightEyeInner => 133,
            FaceLandmark::RightEyeLowerInner => 153,
            FaceLandmark::RightEyeLowerOuter => 144,
        }
    }
}

/// Eye selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eye {
    Left,
    Right,
}

impl Eye {
    /// EAR sextet p1..p6: horizontal corner, two upper-lid points,
    /// opposite corner, two lower-lid points (p2/p6 and p3/p5 face each other)
    pub const fn sextet(self) -> [FaceLandmark; 6] {
        match self {
            Eye::Left => [
                FaceLandmark::LeftEyeInner,
                FaceLandmark::LeftEyeUpperInner,
                FaceLandmark::LeftEyeUpperOuter,
                FaceLandmark::LeftEyeOuter,
                FaceLandmark::LeftEyeLowerOuter,
                FaceLandmark::LeftEyeLowerInner,
            ],
            Eye::Right => [
                FaceLandmark::RightEyeOuter,
                FaceLandmark::RightEyeUpperOuter,
                FaceLandmark::RightEyeUpperInner,
                FaceLandmark::RightEyeInner,
                FaceLandmark::RightEyeLowerInner,
                FaceLandmark::RightEyeLowerOuter,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_fit_mesh() {
        for landmark in FaceLandmark::ALL {
            assert!(landmark.index() < FACE_MESH_POINTS);
        }
        assert!(PoseLandmark::RightShoulder.index() < POSE_POINTS);
    }

    #[test]
    fn test_sextet_order() {
        let left: Vec<usize> = Eye::Left.sextet().iter().map(|l| l.index()).collect();
        let right: Vec<usize> = Eye::Right.sextet().iter().map(|l| l.index()).collect();
        assert_eq!(left, vec![362, 385, 387, 263, 373, 380]);
        assert_eq!(right, vec![33, 160, 158, 133, 153, 144]);
    }
}
