//! # Unit Types
//!
//! Angle wrappers plus the fail-soft numeric coercion applied to every
//! configuration number.
//!
//! ## Conventions
//!
//! - Length: millimetres. Resolved dimensions and cutting-list rows are whole
//!   millimetres; member geometry stays `f64` because sloped lengths are not.
//! - Angle: radians everywhere in outputs. [`Degrees`] exists only for display.
//!
//! ## Example
//!
//! ```rust
//! use shed_core::units::{coerce_mm, Degrees, Radians, MAX_MM};
//!
//! let pitch = Radians::from_rise_run(600.0, 4000.0);
//! let shown: Degrees = pitch.into();
//! assert!((shown.0 - 8.53).abs() < 0.01);
//!
//! assert_eq!(coerce_mm(f64::NAN, 50.0, 0), 50);
//! assert_eq!(coerce_mm(1e300, 3000.0, 1), MAX_MM);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Angles
// ============================================================================

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Radians {
    /// Slope angle for a rise over a horizontal run.
    ///
    /// A zero or negative run yields a flat angle rather than a NaN.
    pub fn from_rise_run(rise: f64, run: f64) -> Self {
        if run <= 0.0 || !rise.is_finite() || !run.is_finite() {
            return Radians(0.0);
        }
        Radians((rise / run).atan())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

// ============================================================================
// Fail-soft coercion
// ============================================================================

/// Largest magnitude any coerced length may take (100 m). Keeps sums of
/// coerced values inside `i64` and every layout loop bounded.
pub const MAX_MM: i64 = 100_000;

/// Coerce a raw configuration number to whole millimetres.
///
/// Non-finite values fall back to `default`, the result is floored to an
/// integer and then clamped to `[min, MAX_MM]`, and never below `-MAX_MM`.
/// Never panics.
pub fn coerce_mm(value: f64, default: f64, min: i64) -> i64 {
    let value = if value.is_finite() { value } else { default };
    let value = if value.is_finite() { value } else { min as f64 };
    let floored = value.floor() as i64;
    let lo = min.max(-MAX_MM);
    floored.clamp(lo, MAX_MM.max(lo))
}

/// [`coerce_mm`] for optional inputs; `None` behaves like a non-finite value.
pub fn coerce_opt_mm(value: Option<f64>, default: f64, min: i64) -> i64 {
    coerce_mm(value.unwrap_or(f64::NAN), default, min)
}
