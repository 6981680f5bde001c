//! The pupil estimate produced by an engine for one frame.

/// A fitted pupil ellipse plus its reliability assessment.
///
/// Geometry is in image coordinates. When `valid` is false the remaining
/// fields carry sentinel values and must not be treated as a detection;
/// they are deliberately passed through unsanitized so callers can log
/// exactly what the engine reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pupil {
    /// Ellipse center (x, y).
    pub center: (f32, f32),
    /// Bounding extents (width, height) of the fitted ellipse.
    pub size: (f32, f32),
    /// Ellipse rotation in degrees.
    pub angle: f32,
    /// Estimate reliability in [0, 1]; meaningful only when requested.
    pub confidence: f32,
    /// True iff the engine judges the estimate usable.
    pub valid: bool,
}

impl Pupil {
    /// The sentinel estimate an engine returns when nothing was found.
    pub const fn invalid() -> Self {
        Self {
            center: (-1.0, -1.0),
            size: (-1.0, -1.0),
            angle: 0.0,
            confidence: 0.0,
            valid: false,
        }
    }

    /// Longer ellipse extent.
    pub fn major_axis(&self) -> f32 {
        self.size.0.max(self.size.1)
    }

    /// Shorter ellipse extent.
    pub fn minor_axis(&self) -> f32 {
        self.size.0.min(self.size.1)
    }
}
