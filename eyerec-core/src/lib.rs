//! Engine-facing contract for pupil detection and tracking.
//!
//! This crate defines the types that cross the boundary between a driving
//! application and an opaque pupil estimation engine: the borrowed image
//! frame view, the detection/tracking parameter sets with their
//! engine-defined defaults, the pupil estimate itself, and the
//! [`PupilDetector`] / [`PupilTracker`] traits an engine implements.
//! It carries no algorithm; [`MockEngine`] exists for tests and examples.

pub mod engine;
pub mod frame;
pub mod mock;
pub mod params;
pub mod pupil;

pub use engine::{EngineError, PupilDetector, PupilTracker};
pub use frame::{FrameError, ImageFrame};
pub use mock::MockEngine;
pub use params::{DetectionParams, Roi, TrackingParams};
pub use pupil::Pupil;

/// Frame timestamp in milliseconds since an arbitrary session epoch.
///
/// The unit is fixed for the lifetime of a session; the engine contract
/// uses the same unit for track-age thresholds.
pub type Timestamp = f64;
