//! Rounding helpers shared by every calculator
//!
//! Results are rounded with ties going toward positive infinity, so that
//! `-248.5` becomes `-248` and `2.5` becomes `3`. `f64::round` rounds ties
//! away from zero and would disagree on negative intermediate values.
//!
//! This agrees with JavaScript's `Math.round` for every value the
//! calculators produce. The two differ only at `0.49999999999999994`, where
//! adding `0.5` rounds up to `1.0`, and at magnitudes of 2^52 and above,
//! where `x + 0.5` is no longer exact.

/// Round to the nearest whole number, ties toward +∞
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to the nearest integer and convert
pub fn round_to_int(value: f64) -> i64 {
    round_half_up(value) as i64
}

/// Round to one decimal place
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}
