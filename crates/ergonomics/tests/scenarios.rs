//! End-to-end scenarios through a full analysis session

use ergonomics::{AnalysisConfig, FaceFrame, LandmarkPoint, PoseFrame, Session, Status};
use landmarks::{Eye, FACE_MESH_POINTS};

fn session() -> Session {
    Session::new(AnalysisConfig::default()).unwrap()
}

/// Shoulders level at y = 0.7; nose `gap` above them
fn pose(gap: f64, nose_visibility: f64) -> PoseFrame {
    PoseFrame::new(
        LandmarkPoint::with_visibility(0.62, 0.7, 0.95),
        LandmarkPoint::with_visibility(0.38, 0.7, 0.95),
        LandmarkPoint::with_visibility(0.5, 0.7 - gap, nose_visibility),
    )
    .unwrap()
}

fn good_pose() -> PoseFrame {
    pose(0.35, 0.95)
}

fn slouched_pose() -> PoseFrame {
    pose(0.1, 0.95)
}

/// Level face, corners 0.15 apart, both eyes `opening` tall over a 0.05 width
fn face(opening: f64) -> FaceFrame {
    let mut points = vec![LandmarkPoint::new(0.5, 0.4); FACE_MESH_POINTS];
    let h = opening / 2.0;
    let shape = [(0.0, 0.0), (0.015, -h), (0.035, -h), (0.05, 0.0), (0.035, h), (0.015, h)];

    // right eye runs outer -> inner from x = 0.425, left eye inner -> outer ending at 0.575
    for (eye, start) in [(Eye::Right, 0.425), (Eye::Left, 0.525)] {
        for (landmark, (dx, dy)) in eye.sextet().iter().zip(shape) {
            points[landmark.index()] = LandmarkPoint::new(start + dx, 0.4 + dy);
        }
    }
    FaceFrame::new(points).unwrap()
}

fn open_face() -> FaceFrame {
    face(0.03)
}

fn closed_face() -> FaceFrame {
    face(0.002)
}

#[test]
fn alternating_posture_warns_then_recovers() {
    let mut session = session();

    for i in 0..20 {
        let frame = if i % 2 == 0 { slouched_pose() } else { good_pose() };
        session.tick(Some(&frame), None);
    }
    assert_eq!(session.latest().posture, Status::Warning);
    assert_eq!(session.posture().window().mean(), Some(0.5));

    for _ in 0..15 {
        session.tick(Some(&good_pose()), None);
    }
    assert_eq!(session.latest().posture, Status::Good);
}

#[test]
fn low_visibility_nose_keeps_previous_status() {
    let mut session = session();
    for _ in 0..3 {
        session.tick(Some(&slouched_pose()), None);
    }
    let before = session.latest();
    let len_before = session.posture().window().len();

    let after = session.tick(Some(&pose(0.35, 0.4)), None);

    assert_eq!(after.posture, before.posture);
    assert_eq!(after.posture, Status::Warning);
    assert_eq!(session.posture().window().len(), len_before);
}

#[test]
fn missing_frames_keep_stale_statuses() {
    let mut session = session();
    session.tick(Some(&good_pose()), Some(&open_face()));
    let report = session.tick(None, None);

    assert_eq!(report.posture, Status::Good);
    assert_eq!(report.tilt, Status::Good);
    assert_eq!(report.distance, Status::Good);
}

#[test]
fn blink_sequences() {
    let mut session = session();
    let open = open_face();
    let closed = closed_face();

    // one closed frame is noise
    session.tick(None, Some(&closed));
    session.tick(None, Some(&open));
    assert_eq!(session.blink_count(), 0);

    // two closed frames make a blink
    session.tick(None, Some(&closed));
    session.tick(None, Some(&closed));
    assert_eq!(session.blink_count(), 0);
    session.tick(None, Some(&open));
    assert_eq!(session.blink_count(), 1);

    // a long closure is still a single blink
    for _ in 0..5 {
        session.tick(None, Some(&closed));
    }
    let report = session.tick(None, Some(&open));
    assert_eq!(report.blink, 2);
}

#[test]
fn face_absence_leaves_blink_run_untouched() {
    let mut session = session();
    session.tick(None, Some(&closed_face()));
    session.tick(None, None);
    session.tick(None, Some(&closed_face()));
    assert_eq!(session.face().blink_state().closed_run(), 2);

    session.tick(None, Some(&open_face()));
    assert_eq!(session.blink_count(), 1);
}

#[test]
fn reset_clears_everything() {
    let mut session = session();
    for _ in 0..2 {
        session.tick(Some(&good_pose()), Some(&closed_face()));
    }
    session.tick(Some(&good_pose()), Some(&open_face()));
    assert_eq!(session.blink_count(), 1);

    session.reset();
    assert_eq!(session.blink_count(), 0);
    assert_eq!(session.tick_count(), 0);
    assert_eq!(session.tick(None, None).posture, Status::Unknown);
}

#[test]
fn short_face_mesh_is_rejected() {
    let err = FaceFrame::new(vec![LandmarkPoint::default(); 68]).unwrap_err();
    assert!(err.to_string().contains("invalid landmark frame shape"));
}

#[test]
fn non_finite_pose_is_rejected_before_analysis() {
    let mut session = session();
    let err = PoseFrame::new(
        LandmarkPoint::with_visibility(0.62, 0.7, 0.95),
        LandmarkPoint::with_visibility(0.38, 0.7, 0.95),
        LandmarkPoint::with_visibility(f64::NAN, 0.35, 0.95),
    )
    .unwrap_err();
    assert!(err.to_string().contains("invalid landmark coordinate"));

    // the caller never gets a frame to tick with, so nothing is judged
    let report = session.tick(None, None);
    assert_eq!(report.posture, Status::Unknown);
    assert!(session.posture().window().is_empty());
}

#[test]
fn report_snapshot_is_not_mutated_by_later_ticks() {
    let mut session = session();
    let first = session.tick(Some(&good_pose()), None);
    for _ in 0..10 {
        session.tick(Some(&slouched_pose()), None);
    }
    assert_eq!(first.posture, Status::Good);
    assert_eq!(session.latest().posture, Status::Warning);
}
