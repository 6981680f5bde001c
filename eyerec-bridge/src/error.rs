//! Errors produced while marshalling a detection or tracking call.
//!
//! Every variant aborts the whole call: there is no partial record and no
//! local recovery. A caller receives either a complete, internally
//! consistent record or one of these.

use eyerec_core::{EngineError, FrameError};
use thiserror::Error;

/// Boundary-layer error taxonomy.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BridgeError {
    /// Buffer rank or channel count does not describe a frame.
    #[error("invalid image shape {shape:?}: expected HxW grayscale or HxWx3 color")]
    InvalidImageShape {
        /// The shape as received, for diagnostics.
        shape: Vec<usize>,
    },

    /// A supplied override has the wrong shape, type, or range.
    #[error("invalid value for parameter `{key}`: expected {expected}")]
    InvalidParameterValue {
        /// The recognized override key that failed.
        key: &'static str,
        /// Human-readable description of the accepted form.
        expected: &'static str,
    },

    /// Resolved maximum pupil diameter is below the resolved minimum.
    ///
    /// Raised after the merge and before any engine call is made.
    #[error("inconsistent pupil diameter bounds: max {max} px < min {min} px")]
    InconsistentDiameterBounds {
        /// Resolved minimum diameter in pixels.
        min: f32,
        /// Resolved maximum diameter in pixels.
        max: f32,
    },

    /// Engine-originated failure, passed through unchanged.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl From<FrameError> for BridgeError {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::InvalidImageShape { shape } => Self::InvalidImageShape { shape },
        }
    }
}
