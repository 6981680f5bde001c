//! End-to-end session scenarios against the mock engine.

mod common;

use approx::assert_relative_eq;
use common::{bgr_buffer, gray_buffer, init_logging};
use eyerec_bridge::{
    BridgeError, DetectionSession, EngineError, MockEngine, Overrides, Pupil, Roi,
    TrackingSession, FRAME_INTERVAL_MS,
};

#[test]
fn detect_on_grayscale_frame_yields_finite_record() {
    init_logging();
    let mut session = DetectionSession::new(MockEngine::new());

    let buffer = gray_buffer(480, 640);
    let record = session.detect(buffer.view().into_dyn()).unwrap();

    assert!(record.valid);
    for value in [
        record.center_x,
        record.center_y,
        record.width,
        record.height,
        record.angle,
        record.confidence,
    ] {
        assert!(value.is_finite());
    }
    assert_eq!(record.center_x, 320.0);
    assert_eq!(record.center_y, 240.0);
}

#[test]
fn detect_accepts_color_frames() {
    init_logging();
    let mut session = DetectionSession::new(MockEngine::new());

    let buffer = bgr_buffer(240, 320);
    let record = session
        .detect_with_params(buffer.view().into_dyn(), &Overrides::new())
        .unwrap();
    assert!(record.valid);

    let call = &session.engine().detect_calls()[0];
    assert_eq!((call.width, call.height, call.channels), (320, 240, 3));
}

#[test]
fn malformed_buffer_is_rejected_without_engine_call() {
    init_logging();
    let mut session = DetectionSession::new(MockEngine::new());

    let buffer = ndarray::Array3::<u8>::zeros((480, 640, 4));
    let err = session.detect(buffer.view().into_dyn()).unwrap_err();

    assert_eq!(
        err,
        BridgeError::InvalidImageShape {
            shape: vec![480, 640, 4]
        }
    );
    assert!(session.engine().detect_calls().is_empty());
}

#[test]
fn inconsistent_diameter_bounds_abort_before_engine() {
    init_logging();
    let mut session = DetectionSession::new(MockEngine::new());

    let overrides = Overrides::new()
        .set("roi", (10i64, 10, 50, 50))
        .set("min_pupil_diameter", 5.0)
        .set("max_pupil_diameter", 2.0);
    let err = session
        .detect_with_params(gray_buffer(480, 640).view().into_dyn(), &overrides)
        .unwrap_err();

    assert_eq!(
        err,
        BridgeError::InconsistentDiameterBounds { min: 5.0, max: 2.0 }
    );
    assert!(session.engine().detect_calls().is_empty());
}

#[test]
fn overrides_reach_the_engine_and_siblings_stay_default() {
    init_logging();
    let mut session = DetectionSession::new(MockEngine::new());

    let overrides = Overrides::new()
        .set("roi", (10i64, 10, 50, 50))
        .set("provide_confidence", false);
    session
        .detect_with_params(gray_buffer(480, 640).view().into_dyn(), &overrides)
        .unwrap();

    let params = &session.engine().detect_calls()[0].params;
    assert_eq!(params.roi, Some(Roi::new(10, 10, 50, 50)));
    assert!(!params.provide_confidence);
    assert_eq!(params.min_pupil_diameter_px, 4.0);
    assert_eq!(params.max_pupil_diameter_px, 160.0);
}

#[test]
fn describe_is_idempotent_and_stateless() {
    let detection = DetectionSession::new(MockEngine::new());
    let tracking = TrackingSession::new(MockEngine::new());

    for _ in 0..3 {
        assert_eq!(detection.describe(), "mock pupil engine");
        assert_eq!(tracking.describe(), "mock pupil engine");
    }
    assert_eq!(tracking.last_timestamp(), 0.0);
    assert!(detection.engine().detect_calls().is_empty());
}

#[test]
fn tracking_without_timestamps_advances_by_the_frame_interval() {
    init_logging();
    let mut session = TrackingSession::new(MockEngine::new());
    let buffer = gray_buffer(480, 640);

    for _ in 0..3 {
        session.track(buffer.view().into_dyn(), None).unwrap();
    }

    let timestamps: Vec<f64> = session
        .engine()
        .track_calls()
        .iter()
        .map(|call| call.timestamp)
        .collect();
    assert_eq!(timestamps.len(), 3);
    for (n, timestamp) in timestamps.iter().enumerate() {
        assert_relative_eq!(*timestamp, (n + 1) as f64 * FRAME_INTERVAL_MS, epsilon = 1e-9);
    }
    // Strictly increasing by exactly one interval each call.
    assert_relative_eq!(timestamps[2] - timestamps[1], FRAME_INTERVAL_MS, epsilon = 1e-9);
}

#[test]
fn explicit_timestamp_overrides_history_then_resumes() {
    init_logging();
    let mut session = TrackingSession::new(MockEngine::new());
    let buffer = gray_buffer(120, 160);

    session.track(buffer.view().into_dyn(), None).unwrap();
    session.track(buffer.view().into_dyn(), Some(2000.0)).unwrap();
    session.track(buffer.view().into_dyn(), None).unwrap();

    let calls = session.engine().track_calls();
    assert_relative_eq!(calls[0].timestamp, FRAME_INTERVAL_MS, epsilon = 1e-9);
    assert_eq!(calls[1].timestamp, 2000.0);
    assert_relative_eq!(calls[2].timestamp, 2000.0 + FRAME_INTERVAL_MS, epsilon = 1e-9);
}

#[test]
fn negative_timestamp_behaves_as_absent() {
    init_logging();
    let mut session = TrackingSession::new(MockEngine::new());
    let buffer = gray_buffer(120, 160);

    session.track(buffer.view().into_dyn(), Some(-1.0)).unwrap();
    assert_relative_eq!(session.last_timestamp(), FRAME_INTERVAL_MS, epsilon = 1e-9);
}

#[test]
fn clock_advances_even_when_overrides_fail() {
    init_logging();
    let mut session = TrackingSession::new(MockEngine::new());
    let buffer = gray_buffer(120, 160);

    let bad = Overrides::new().set("min_detection_confidence", 2.0);
    let err = session
        .track_with_params(buffer.view().into_dyn(), &bad, None)
        .unwrap_err();
    assert!(matches!(err, BridgeError::InvalidParameterValue { .. }));

    // The session timeline moved despite the rejected call.
    assert_relative_eq!(session.last_timestamp(), FRAME_INTERVAL_MS, epsilon = 1e-9);
    assert!(session.engine().track_calls().is_empty());
}

#[test]
fn tracking_overrides_reach_the_engine() {
    init_logging();
    let mut session = TrackingSession::new(MockEngine::new());

    let overrides = Overrides::new()
        .set("max_age", 120.0)
        .set("min_detection_confidence", 0.5);
    session
        .track_with_params(gray_buffer(480, 640).view().into_dyn(), &overrides, Some(10.0))
        .unwrap();

    let call = &session.engine().track_calls()[0];
    assert_eq!(call.timestamp, 10.0);
    assert_eq!(call.params.max_age_ms, 120.0);
    assert_eq!(call.params.min_detection_confidence, 0.5);
    assert_eq!(
        call.params.detection,
        eyerec_bridge::DetectionParams::default()
    );
}

#[test]
fn engine_failure_propagates_unchanged() {
    init_logging();
    let mut engine = MockEngine::new();
    engine.fail_with(EngineError::new("internal resample failure"));
    let mut session = DetectionSession::new(engine);

    let err = session
        .detect(gray_buffer(64, 64).view().into_dyn())
        .unwrap_err();
    assert_eq!(
        err,
        BridgeError::Engine(EngineError::new("internal resample failure"))
    );
}

#[test]
fn invalid_engine_result_is_projected_unsanitized() {
    init_logging();
    let mut session = TrackingSession::new(MockEngine::with_script(vec![Pupil::invalid()]));

    let record = session
        .track(gray_buffer(64, 64).view().into_dyn(), None)
        .unwrap();
    assert!(!record.valid);
    assert_eq!(record.center_x, -1.0);
    assert_eq!(record.height, -1.0);
}

#[test]
fn distinct_sessions_are_fully_independent() {
    init_logging();
    let mut first = TrackingSession::new(MockEngine::new());
    let mut second = TrackingSession::new(MockEngine::new());
    let buffer = gray_buffer(64, 64);

    first.track(buffer.view().into_dyn(), Some(500.0)).unwrap();
    second.track(buffer.view().into_dyn(), None).unwrap();

    assert_eq!(first.last_timestamp(), 500.0);
    assert_relative_eq!(second.last_timestamp(), FRAME_INTERVAL_MS, epsilon = 1e-9);
}
