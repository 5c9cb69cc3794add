//! Inbound C entry points for host environments.

use std::ffi::{c_float, c_int};

use gini_round::round_half_away_from_zero;

use crate::bridge::Bridge;

/// Rounds `gini_value` through the default out-parameter routine.
///
/// Returns the sentinel (-999) if the routine leaves its slot untouched.
#[unsafe(no_mangle)]
pub extern "C" fn process_gini_float(gini_value: c_float) -> c_int {
    Bridge::default_routine().round(gini_value)
}

/// Rounds `gini_value` natively and returns it directly, without a bridge.
#[unsafe(no_mangle)]
pub extern "C" fn process_gini_pure(gini_value: c_float) -> c_int {
    round_half_away_from_zero(gini_value)
}
