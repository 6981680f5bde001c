//! Scriptable mock engine for tests and examples.

use std::collections::VecDeque;

use crate::engine::{EngineError, PupilDetector, PupilTracker};
use crate::frame::ImageFrame;
use crate::params::{DetectionParams, TrackingParams};
use crate::pupil::Pupil;
use crate::Timestamp;

/// One observed `detect` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectCall {
    /// Parameters as the engine received them.
    pub params: DetectionParams,
    /// Frame width in pixels.
    pub width: usize,
    /// Frame height in pixels.
    pub height: usize,
    /// Frame channel count.
    pub channels: usize,
}

/// One observed `detect_and_track` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackCall {
    /// Timestamp supplied for the frame.
    pub timestamp: Timestamp,
    /// Parameters as the engine received them.
    pub params: TrackingParams,
    /// Frame width in pixels.
    pub width: usize,
    /// Frame height in pixels.
    pub height: usize,
    /// Frame channel count.
    pub channels: usize,
}

/// Mock engine implementing both the detector and tracker contracts.
///
/// Scripted results are returned in order; once the script runs dry the
/// engine synthesizes a confident pupil at the frame center. Every call is
/// recorded so tests can assert exactly what crossed the boundary, and the
/// engine can be armed to fail to exercise error propagation.
#[derive(Debug, Default)]
pub struct MockEngine {
    script: VecDeque<Pupil>,
    fail_with: Option<EngineError>,
    detect_calls: Vec<DetectCall>,
    track_calls: Vec<TrackCall>,
}

impl MockEngine {
    /// Create a mock engine that synthesizes frame-center pupils.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock engine returning the given results in order.
    pub fn with_script(script: Vec<Pupil>) -> Self {
        Self {
            script: script.into(),
            ..Self::default()
        }
    }

    /// Arm the engine to fail every subsequent call with `error`.
    pub fn fail_with(&mut self, error: EngineError) {
        self.fail_with = Some(error);
    }

    /// Observed `detect` invocations, oldest first.
    pub fn detect_calls(&self) -> &[DetectCall] {
        &self.detect_calls
    }

    /// Observed `detect_and_track` invocations, oldest first.
    pub fn track_calls(&self) -> &[TrackCall] {
        &self.track_calls
    }

    fn next_result(&mut self, frame: &ImageFrame<'_>) -> Result<Pupil, EngineError> {
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }
        Ok(self
            .script
            .pop_front()
            .unwrap_or_else(|| centered_pupil(frame)))
    }
}

/// Synthesized confident pupil at the frame center.
fn centered_pupil(frame: &ImageFrame<'_>) -> Pupil {
    Pupil {
        center: (frame.width() as f32 / 2.0, frame.height() as f32 / 2.0),
        size: (40.0, 38.0),
        angle: 0.0,
        confidence: 0.9,
        valid: true,
    }
}

impl PupilDetector for MockEngine {
    fn detect(
        &mut self,
        frame: &ImageFrame<'_>,
        params: &DetectionParams,
    ) -> Result<Pupil, EngineError> {
        self.detect_calls.push(DetectCall {
            params: params.clone(),
            width: frame.width(),
            height: frame.height(),
            channels: frame.channels(),
        });
        self.next_result(frame)
    }

    fn description(&self) -> &'static str {
        "mock pupil engine"
    }
}

impl PupilTracker for MockEngine {
    fn detect_and_track(
        &mut self,
        timestamp: Timestamp,
        frame: &ImageFrame<'_>,
        params: &TrackingParams,
    ) -> Result<Pupil, EngineError> {
        self.track_calls.push(TrackCall {
            timestamp,
            params: params.clone(),
            width: frame.width(),
            height: frame.height(),
            channels: frame.channels(),
        });
        self.next_result(frame)
    }

    fn description(&self) -> &'static str {
        "mock pupil engine"
    }
}
