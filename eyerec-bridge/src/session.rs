//! Detection and tracking sessions composed around an engine.
//!
//! A session owns its engine and the engine-default parameter set; the
//! tracking session additionally owns the [`SessionClock`]. Every call
//! runs adapt -> resolve -> engine -> project synchronously, and the
//! first failure aborts the call with no partial record. Sessions take
//! `&mut self`, so concurrent use of one instance is ruled out at the
//! type level; distinct instances share nothing.

use eyerec_core::{
    DetectionParams, ImageFrame, PupilDetector, PupilTracker, Timestamp, TrackingParams,
};
use ndarray::ArrayViewD;

use crate::clock::SessionClock;
use crate::error::BridgeError;
use crate::overrides::{resolve_detection, resolve_tracking, Overrides};
use crate::record::PupilRecord;

/// Stateless single-frame detection session.
///
/// No field observably changes between calls; only the engine's own
/// opaque internals may.
pub struct DetectionSession<D: PupilDetector> {
    engine: D,
    defaults: DetectionParams,
}

impl<D: PupilDetector> DetectionSession<D> {
    /// Create a session using the engine-defined default parameters.
    pub fn new(engine: D) -> Self {
        Self::with_defaults(engine, DetectionParams::default())
    }

    /// Create a session with explicit default parameters.
    pub fn with_defaults(engine: D, defaults: DetectionParams) -> Self {
        Self { engine, defaults }
    }

    /// Static identification of the underlying engine variant.
    pub fn describe(&self) -> &'static str {
        self.engine.description()
    }

    /// Access the owned engine.
    pub fn engine(&self) -> &D {
        &self.engine
    }

    /// Detect a pupil using the session's default parameters.
    pub fn detect(&mut self, buffer: ArrayViewD<'_, u8>) -> Result<PupilRecord, BridgeError> {
        let frame = ImageFrame::from_dyn(buffer)?;
        let pupil = self.engine.detect(&frame, &self.defaults)?;
        Ok(PupilRecord::from(pupil))
    }

    /// Detect a pupil with sparse overrides merged onto the defaults.
    pub fn detect_with_params(
        &mut self,
        buffer: ArrayViewD<'_, u8>,
        overrides: &Overrides,
    ) -> Result<PupilRecord, BridgeError> {
        let frame = ImageFrame::from_dyn(buffer)?;
        let params = resolve_detection(&self.defaults, overrides)?;
        log::debug!(
            "detect: {}x{}x{} roi={:?} diameter=[{}, {}] px",
            frame.width(),
            frame.height(),
            frame.channels(),
            params.roi,
            params.min_pupil_diameter_px,
            params.max_pupil_diameter_px,
        );
        let pupil = self.engine.detect(&frame, &params)?;
        if !pupil.valid {
            log::debug!("engine reported no usable pupil estimate");
        }
        Ok(PupilRecord::from(pupil))
    }
}

/// Stateful temporal tracking session.
///
/// Owns the session clock one-to-one; the clock is never reset except by
/// destroying and recreating the session.
pub struct TrackingSession<T: PupilTracker> {
    engine: T,
    defaults: TrackingParams,
    clock: SessionClock,
}

impl<T: PupilTracker> TrackingSession<T> {
    /// Create a session using the engine-defined default parameters.
    pub fn new(engine: T) -> Self {
        Self::with_defaults(engine, TrackingParams::default())
    }

    /// Create a session with explicit default parameters.
    pub fn with_defaults(engine: T, defaults: TrackingParams) -> Self {
        Self {
            engine,
            defaults,
            clock: SessionClock::new(),
        }
    }

    /// Static identification of the underlying engine variant.
    pub fn describe(&self) -> &'static str {
        self.engine.description()
    }

    /// Access the owned engine.
    pub fn engine(&self) -> &T {
        &self.engine
    }

    /// Timestamp the clock last produced.
    pub fn last_timestamp(&self) -> Timestamp {
        self.clock.current()
    }

    /// Track a pupil using the session's default parameters.
    ///
    /// `timestamp` of `None` (or a negative value) advances the clock by
    /// the synthetic frame interval instead.
    pub fn track(
        &mut self,
        buffer: ArrayViewD<'_, u8>,
        timestamp: Option<Timestamp>,
    ) -> Result<PupilRecord, BridgeError> {
        // The clock moves before any validation; explicit timestamps are
        // authoritative even for calls that subsequently fail.
        let timestamp = self.clock.advance(timestamp);
        let frame = ImageFrame::from_dyn(buffer)?;
        let pupil = self
            .engine
            .detect_and_track(timestamp, &frame, &self.defaults)?;
        Ok(PupilRecord::from(pupil))
    }

    /// Track a pupil with sparse overrides merged onto the defaults.
    pub fn track_with_params(
        &mut self,
        buffer: ArrayViewD<'_, u8>,
        overrides: &Overrides,
        timestamp: Option<Timestamp>,
    ) -> Result<PupilRecord, BridgeError> {
        let timestamp = self.clock.advance(timestamp);
        let frame = ImageFrame::from_dyn(buffer)?;
        let params = resolve_tracking(&self.defaults, overrides)?;
        log::debug!(
            "track: t={timestamp:.2} ms, {}x{}x{} max_age={} ms min_conf={}",
            frame.width(),
            frame.height(),
            frame.channels(),
            params.max_age_ms,
            params.min_detection_confidence,
        );
        let pupil = self.engine.detect_and_track(timestamp, &frame, &params)?;
        if !pupil.valid {
            log::debug!("engine reported no usable pupil estimate at t={timestamp:.2} ms");
        }
        Ok(PupilRecord::from(pupil))
    }
}
