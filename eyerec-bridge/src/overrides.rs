//! Sparse parameter overrides and their resolution against engine defaults.
//!
//! Callers supply a loose name-to-value map; resolution merges it onto the
//! engine-defined defaults field by field. Unknown keys are ignored for
//! forward compatibility, recognized keys are validated for type and
//! range, and a failing key aborts the whole resolution so no partially
//! applied parameter set can reach the engine.

use std::collections::BTreeMap;

use eyerec_core::{DetectionParams, Roi, TrackingParams};

use crate::error::BridgeError;

/// Override key: region of interest, 4-tuple of integers (x, y, w, h).
pub const KEY_ROI: &str = "roi";
/// Override key: minimum accepted pupil diameter in pixels.
pub const KEY_MIN_PUPIL_DIAMETER: &str = "min_pupil_diameter";
/// Override key: maximum accepted pupil diameter in pixels.
pub const KEY_MAX_PUPIL_DIAMETER: &str = "max_pupil_diameter";
/// Override key: whether confidence is computed (detection only).
pub const KEY_PROVIDE_CONFIDENCE: &str = "provide_confidence";
/// Override key: track staleness threshold in milliseconds (tracking only).
pub const KEY_MAX_AGE: &str = "max_age";
/// Override key: continuity trust threshold in [0, 1] (tracking only).
pub const KEY_MIN_DETECTION_CONFIDENCE: &str = "min_detection_confidence";

/// Loosely-typed value supplied in an override map.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Integer scalar; accepted wherever a float is expected.
    Int(i64),
    /// Float scalar.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
    /// Tuple of integers, used for the region of interest.
    IntTuple(Vec<i64>),
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<(i64, i64, i64, i64)> for ParamValue {
    fn from((x, y, w, h): (i64, i64, i64, i64)) -> Self {
        Self::IntTuple(vec![x, y, w, h])
    }
}

impl From<Vec<i64>> for ParamValue {
    fn from(values: Vec<i64>) -> Self {
        Self::IntTuple(values)
    }
}

/// Sparse name-to-value parameter override map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    values: BTreeMap<String, ParamValue>,
}

impl Overrides {
    /// Create an empty override map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, builder style.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    /// True when no overrides are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Resolve detection overrides against engine defaults.
///
/// Recognized keys: `roi`, `min_pupil_diameter`, `max_pupil_diameter`,
/// `provide_confidence`. Fields absent from the map retain the default
/// exactly; tracking-only keys and unknown keys are ignored.
pub fn resolve_detection(
    defaults: &DetectionParams,
    overrides: &Overrides,
) -> Result<DetectionParams, BridgeError> {
    let mut params = defaults.clone();
    merge_detection_fields(&mut params, overrides)?;
    if let Some(value) = overrides.get(KEY_PROVIDE_CONFIDENCE) {
        params.provide_confidence = match value {
            ParamValue::Bool(flag) => *flag,
            _ => {
                return Err(BridgeError::InvalidParameterValue {
                    key: KEY_PROVIDE_CONFIDENCE,
                    expected: "boolean",
                })
            }
        };
    }
    check_diameter_bounds(&params)?;
    Ok(params)
}

/// Resolve tracking overrides against engine defaults.
///
/// Recognized keys: `roi`, `min_pupil_diameter`, `max_pupil_diameter`,
/// `max_age`, `min_detection_confidence`. Fields absent from the map
/// retain the default exactly; detection-only keys and unknown keys are
/// ignored.
pub fn resolve_tracking(
    defaults: &TrackingParams,
    overrides: &Overrides,
) -> Result<TrackingParams, BridgeError> {
    let mut params = defaults.clone();
    merge_detection_fields(&mut params.detection, overrides)?;
    if let Some(age) = checked_float(overrides, KEY_MAX_AGE, "non-negative duration in ms", |v| {
        v.is_finite() && v >= 0.0
    })? {
        params.max_age_ms = age;
    }
    if let Some(confidence) = checked_float(
        overrides,
        KEY_MIN_DETECTION_CONFIDENCE,
        "float in [0, 1]",
        |v| (0.0..=1.0).contains(&v),
    )? {
        params.min_detection_confidence = confidence as f32;
    }
    check_diameter_bounds(&params.detection)?;
    Ok(params)
}

/// Merge the fields shared by both parameter kinds.
fn merge_detection_fields(
    params: &mut DetectionParams,
    overrides: &Overrides,
) -> Result<(), BridgeError> {
    if let Some(value) = overrides.get(KEY_ROI) {
        params.roi = Some(parse_roi(value)?);
    }
    if let Some(diameter) = positive_float(overrides, KEY_MIN_PUPIL_DIAMETER)? {
        params.min_pupil_diameter_px = diameter as f32;
    }
    if let Some(diameter) = positive_float(overrides, KEY_MAX_PUPIL_DIAMETER)? {
        params.max_pupil_diameter_px = diameter as f32;
    }
    Ok(())
}

fn parse_roi(value: &ParamValue) -> Result<Roi, BridgeError> {
    let invalid = || BridgeError::InvalidParameterValue {
        key: KEY_ROI,
        expected: "4-tuple of integers (x, y, w, h)",
    };
    let parts = match value {
        ParamValue::IntTuple(parts) if parts.len() == 4 => parts,
        _ => return Err(invalid()),
    };
    let component = |v: i64| i32::try_from(v).map_err(|_| invalid());
    Ok(Roi {
        x: component(parts[0])?,
        y: component(parts[1])?,
        width: component(parts[2])?,
        height: component(parts[3])?,
    })
}

fn positive_float(overrides: &Overrides, key: &'static str) -> Result<Option<f64>, BridgeError> {
    checked_float(overrides, key, "positive float", |v| {
        v.is_finite() && v > 0.0
    })
}

/// Extract a numeric override, accepting ints where floats are expected.
fn checked_float(
    overrides: &Overrides,
    key: &'static str,
    expected: &'static str,
    valid: fn(f64) -> bool,
) -> Result<Option<f64>, BridgeError> {
    let value = match overrides.get(key) {
        Some(value) => value,
        None => return Ok(None),
    };
    let number = match value {
        ParamValue::Float(f) => *f,
        ParamValue::Int(i) => *i as f64,
        _ => return Err(BridgeError::InvalidParameterValue { key, expected }),
    };
    if !valid(number) {
        return Err(BridgeError::InvalidParameterValue { key, expected });
    }
    Ok(Some(number))
}

fn check_diameter_bounds(params: &DetectionParams) -> Result<(), BridgeError> {
    if params.max_pupil_diameter_px < params.min_pupil_diameter_px {
        return Err(BridgeError::InconsistentDiameterBounds {
            min: params.min_pupil_diameter_px,
            max: params.max_pupil_diameter_px,
        });
    }
    Ok(())
}
