//! Detection and tracking parameter sets with engine-defined defaults.

use serde::{Deserialize, Serialize};

use crate::Timestamp;

/// Axis-aligned search region in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roi {
    /// Left edge in pixels.
    pub x: i32,
    /// Top edge in pixels.
    pub y: i32,
    /// Region width in pixels.
    pub width: i32,
    /// Region height in pixels.
    pub height: i32,
}

impl Roi {
    /// Create a new region of interest.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Parameters for a single-frame pupil detection.
///
/// `Default` carries the engine-defined defaults; a `roi` of `None` means
/// the whole frame is searched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionParams {
    /// Search region, `None` for the whole frame.
    pub roi: Option<Roi>,
    /// Smallest accepted pupil diameter in pixels.
    pub min_pupil_diameter_px: f32,
    /// Largest accepted pupil diameter in pixels. Must be >= the minimum.
    pub max_pupil_diameter_px: f32,
    /// Whether the engine computes the confidence score.
    pub provide_confidence: bool,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            roi: None,
            min_pupil_diameter_px: 4.0,
            max_pupil_diameter_px: 160.0,
            provide_confidence: true,
        }
    }
}

/// Parameters for temporal pupil tracking.
///
/// Extends the detection parameters with the thresholds that govern the
/// engine's continue-vs-reacquire decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingParams {
    /// Per-frame detection parameters.
    pub detection: DetectionParams,
    /// Age in milliseconds after which a track is stale and the engine
    /// falls back to full redetection.
    pub max_age_ms: Timestamp,
    /// Confidence in [0, 1] below which an estimate is not trusted as a
    /// prior for the next frame.
    pub min_detection_confidence: f32,
}

impl Default for TrackingParams {
    fn default() -> Self {
        Self {
            detection: DetectionParams::default(),
            max_age_ms: 300.0,
            min_detection_confidence: 0.7,
        }
    }
}
