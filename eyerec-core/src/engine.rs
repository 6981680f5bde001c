//! The opaque engine contract.
//!
//! Engines are the sole source of algorithmic truth: this crate only
//! defines the call shape. Both entry points are synchronous and must not
//! mutate the frame.

use thiserror::Error;

use crate::{DetectionParams, ImageFrame, Pupil, Timestamp, TrackingParams};

/// Opaque failure reported by an engine implementation.
///
/// The boundary layer propagates these unchanged and adds no
/// interpretation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct EngineError(pub String);

impl EngineError {
    /// Build an engine error from any displayable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Single-frame pupil detection engine.
pub trait PupilDetector: Send {
    /// Detect a pupil in one frame with fully-resolved parameters.
    fn detect(
        &mut self,
        frame: &ImageFrame<'_>,
        params: &DetectionParams,
    ) -> Result<Pupil, EngineError>;

    /// Static, human-readable identification of the engine variant.
    fn description(&self) -> &'static str;
}

/// Temporal pupil tracking engine.
///
/// The engine owns all tracking state (priors, loss recovery); callers
/// supply monotone-as-configured timestamps and resolved thresholds and
/// never replicate the continue-vs-reacquire transition logic.
pub trait PupilTracker: Send {
    /// Detect and track a pupil in one timestamped frame.
    fn detect_and_track(
        &mut self,
        timestamp: Timestamp,
        frame: &ImageFrame<'_>,
        params: &TrackingParams,
    ) -> Result<Pupil, EngineError>;

    /// Static, human-readable identification of the engine variant.
    fn description(&self) -> &'static str;
}

impl PupilDetector for Box<dyn PupilDetector> {
    fn detect(
        &mut self,
        frame: &ImageFrame<'_>,
        params: &DetectionParams,
    ) -> Result<Pupil, EngineError> {
        (**self).detect(frame, params)
    }

    fn description(&self) -> &'static str {
        (**self).description()
    }
}

impl PupilTracker for Box<dyn PupilTracker> {
    fn detect_and_track(
        &mut self,
        timestamp: Timestamp,
        frame: &ImageFrame<'_>,
        params: &TrackingParams,
    ) -> Result<Pupil, EngineError> {
        (**self).detect_and_track(timestamp, frame, params)
    }

    fn description(&self) -> &'static str {
        (**self).description()
    }
}
