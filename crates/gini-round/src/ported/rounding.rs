//! Rust port of `process_gini_pure_c` and the rounding half of `asm_float_round`.

use thiserror::Error;

const ROUNDER_TARGET: &str = "rounder";

/// Smallest `f32` that no longer fits in an `i32` (2^31).
const I32_UPPER_BOUND: f32 = 2_147_483_648.0;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RoundError {
    #[error("GINI value is not finite: {value}")]
    NonFinite { value: f32 },

    #[error("GINI value {value} does not fit in a 32-bit score")]
    OutOfRange { value: f32 },
}

/// Rounds a GINI value to the nearest integer, resolving ties away from zero.
///
/// Equivalent to adding 0.5 and truncating for non-negative values, and
/// subtracting 0.5 and truncating for negative values, but evaluated exactly:
/// inputs where `x + 0.5` is inexact in `f32` (for example `0.49999997` or
/// `8388609.0`) still round to the nearest integer.
///
/// The conversion saturates: `NaN` maps to `0`, infinities and values beyond
/// the `i32` range clamp to `i32::MIN` / `i32::MAX`. Use
/// [`try_round_half_away_from_zero`] to reject those inputs instead.
///
/// # Examples
///
/// ```
/// use gini_round::round_half_away_from_zero;
///
/// assert_eq!(round_half_away_from_zero(42.5), 43);
/// assert_eq!(round_half_away_from_zero(-42.5), -43);
/// assert_eq!(round_half_away_from_zero(-0.2), 0);
/// ```
pub fn round_half_away_from_zero(gini_value: f32) -> i32 {
    let rounded = gini_value.round() as i32;
    log::debug!(
        target: ROUNDER_TARGET,
        "input {gini_value:.6}, rounded output {rounded}"
    );
    rounded
}

/// Checked form of [`round_half_away_from_zero`].
///
/// Fails with [`RoundError::NonFinite`] for `NaN` and infinities and with
/// [`RoundError::OutOfRange`] when the rounded value is outside `i32`.
pub fn try_round_half_away_from_zero(gini_value: f32) -> Result<i32, RoundError> {
    if !gini_value.is_finite() {
        return Err(RoundError::NonFinite { value: gini_value });
    }

    let rounded = gini_value.round();
    if rounded < i32::MIN as f32 || rounded >= I32_UPPER_BOUND {
        return Err(RoundError::OutOfRange { value: gini_value });
    }

    Ok(round_half_away_from_zero(gini_value))
}
