//! Property-based tests for round-half-away-from-zero.
//!
//! These tests verify invariants that should hold for every finite input:
//! - The result is the nearest integer, ties away from zero
//! - Integer-valued inputs are returned unchanged
//! - Rounding is symmetric around zero

use gini_round::{round_half_away_from_zero, try_round_half_away_from_zero};
use proptest::prelude::*;

/// Reference rounding in f64, where `x +/- 0.5` is exact for any f32 below 2^29.
fn reference(value: f32) -> i64 {
    let wide = f64::from(value);
    if wide >= 0.0 {
        (wide + 0.5).floor() as i64
    } else {
        (wide - 0.5).ceil() as i64
    }
}

proptest! {
    #[test]
    fn prop_matches_exact_reference(value in -1.0e8f32..1.0e8f32) {
        prop_assert_eq!(i64::from(round_half_away_from_zero(value)), reference(value));
    }

    #[test]
    fn prop_result_is_within_half_of_input(value in -1.0e6f32..1.0e6f32) {
        let rounded = round_half_away_from_zero(value);
        prop_assert!((f64::from(rounded) - f64::from(value)).abs() <= 0.5);
    }

    #[test]
    fn prop_integer_values_are_fixed_points(whole in -16_777_216i32..=16_777_216i32) {
        prop_assert_eq!(round_half_away_from_zero(whole as f32), whole);
    }

    #[test]
    fn prop_rounding_is_symmetric(value in -1.0e8f32..1.0e8f32) {
        prop_assert_eq!(
            round_half_away_from_zero(-value),
            -round_half_away_from_zero(value)
        );
    }

    #[test]
    fn prop_half_ties_move_away_from_zero(whole in 0i32..4_000_000) {
        let tie = whole as f32 + 0.5;
        prop_assert_eq!(round_half_away_from_zero(tie), whole + 1);
        prop_assert_eq!(round_half_away_from_zero(-tie), -(whole + 1));
    }

    #[test]
    fn prop_checked_form_accepts_every_finite_in_range_value(value in -2.0e9f32..2.0e9f32) {
        prop_assert_eq!(
            try_round_half_away_from_zero(value),
            Ok(round_half_away_from_zero(value))
        );
    }
}

#[test]
fn symmetry_holds_at_representation_boundaries() {
    let boundaries = [
        0.499_999_97_f32,
        0.5,
        8_388_607.5,
        8_388_608.0,
        8_388_609.0,
        16_777_216.0,
        f32::MIN_POSITIVE,
    ];
    for value in boundaries {
        assert_eq!(
            round_half_away_from_zero(-value),
            -round_half_away_from_zero(value),
            "value {value}"
        );
        assert_eq!(
            i64::from(round_half_away_from_zero(value)),
            reference(value),
            "value {value}"
        );
    }
}
