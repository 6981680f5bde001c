//! Boundary layer between untyped per-call frame buffers and a typed
//! pupil detection/tracking engine.
//!
//! The crate turns an arbitrary image buffer plus an optional
//! loosely-typed override map into a well-formed engine request, and turns
//! the engine's result back into a flat, stable [`PupilRecord`]. Three
//! concerns live here and nowhere else:
//!
//! - validating and wrapping raw buffers into canonical frame views
//!   (re-exported from `eyerec-core`, zero-copy);
//! - merging sparse overrides onto engine defaults without corrupting
//!   unset fields ([`overrides`]);
//! - per-session monotonic timestamp continuity ([`clock`]), the only
//!   mutable state in the system, owned by its [`TrackingSession`].
//!
//! No pixel-level computation happens in this crate; the engine behind
//! the [`eyerec_core::PupilDetector`] / [`eyerec_core::PupilTracker`]
//! traits is the sole source of algorithmic truth.

pub mod clock;
pub mod error;
pub mod overrides;
pub mod record;
pub mod session;

pub use clock::{SessionClock, FRAME_INTERVAL_MS};
pub use error::BridgeError;
pub use overrides::{resolve_detection, resolve_tracking, Overrides, ParamValue};
pub use record::PupilRecord;
pub use session::{DetectionSession, TrackingSession};

pub use eyerec_core::{
    DetectionParams, EngineError, FrameError, ImageFrame, MockEngine, Pupil, PupilDetector,
    PupilTracker, Roi, Timestamp, TrackingParams,
};
