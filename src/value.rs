//! Numeric value model shared by every resistance.
//!
//! Values are kept rounded to three decimal places. The rounded value is also the identity of a
//! resistance: two resistances with the same rounded value are interchangeable, whatever their
//! structure.

/// Values keep three decimal places.
const SCALE: f64 = 1000.0;

/// Rounds `value` to three decimal places, ties to even.
///
/// Integral results stay integral, so they display without a fractional part.
pub fn round_value(value: f64) -> f64 {
    let rounded = (value * SCALE).round_ties_even() / SCALE;
    if rounded == rounded.trunc() {
        rounded.trunc()
    } else {
        rounded
    }
}

/// Formats a value after rounding, e.g. `100`, `68.75`, `4700`.
pub fn format_value(value: f64) -> String {
    format!("{}", round_value(value))
}

/// Formats a value with the ohm unit suffix, e.g. `220Ω`.
pub fn format_ohms(value: f64) -> String {
    format!("{}Ω", format_value(value))
}

/// Identity key of a value: the rounded value in thousandths.
///
/// Equality, ordering and hashing of keys all agree with the rounded value, which makes the key
/// usable in both hashed and ordered containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValueKey(i64);

impl ValueKey {
    pub fn of(value: f64) -> Self {
        ValueKey((round_value(value) * SCALE).round_ties_even() as i64)
    }
}

/// Signed deviation of `value` from `target`.
pub fn deviation(value: f64, target: f64) -> f64 {
    value - target
}

pub fn absolute_deviation(value: f64, target: f64) -> f64 {
    deviation(value, target).abs()
}
