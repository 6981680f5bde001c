//! Flat caller-facing projection of an engine result.

use eyerec_core::Pupil;
use serde::{Deserialize, Serialize};

/// Stable pupil estimate record with fixed field names.
///
/// Every engine result field maps 1:1; nothing is sanitized when `valid`
/// is false, so callers are contractually required to check `valid`
/// before trusting the geometry or confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PupilRecord {
    /// Ellipse center, x coordinate in image space.
    pub center_x: f32,
    /// Ellipse center, y coordinate in image space.
    pub center_y: f32,
    /// Width of the fitted ellipse's bounding extents.
    pub width: f32,
    /// Height of the fitted ellipse's bounding extents.
    pub height: f32,
    /// Ellipse rotation in degrees.
    pub angle: f32,
    /// Estimate reliability in [0, 1]; meaningful only when requested.
    pub confidence: f32,
    /// True iff the engine judges the estimate usable.
    pub valid: bool,
}

impl From<Pupil> for PupilRecord {
    fn from(pupil: Pupil) -> Self {
        Self {
            center_x: pupil.center.0,
            center_y: pupil.center.1,
            width: pupil.size.0,
            height: pupil.size.1,
            angle: pupil.angle,
            confidence: pupil.confidence,
            valid: pupil.valid,
        }
    }
}
