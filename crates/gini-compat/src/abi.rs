//! Foreign signatures of the rounding routines.
//!
//! Every assumption about how arguments reach an external routine lives in
//! this module. The C convention is the cdecl one on 32-bit x86: the caller
//! pushes `input` then `output` and cleans the stack afterwards; the routine
//! returns nothing and reports through `*output`.

use std::ffi::{c_float, c_int};

use gini_round::round_half_away_from_zero;

pub const NATIVE_ROUTINE_SYMBOL: &str = "native_float_round";
pub const LINKED_ROUTINE_SYMBOL: &str = "asm_float_round";

/// `void routine(float input, int *output)`
///
/// The only outbound signature. The routine reports through `*output` and
/// must write at most one `c_int` there.
pub type RoundIntoFn = unsafe extern "C" fn(input: c_float, output: *mut c_int);

/// Native out-parameter routine, a drop-in for `asm_float_round`.
///
/// A null `output` is ignored.
///
/// # Safety
///
/// A non-null `output` must be valid for a write of one `c_int`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn native_float_round(input: c_float, output: *mut c_int) {
    if output.is_null() {
        return;
    }
    let rounded = round_half_away_from_zero(input);
    unsafe { output.write(rounded) };
}

#[cfg(feature = "linked-routine")]
unsafe extern "C" {
    /// Hand-written routine resolved at link time.
    pub fn asm_float_round(input: c_float, output: *mut c_int);
}

/// Routine behind the inbound entry points: the link-time routine when the
/// `linked-routine` feature is on, the native port otherwise.
#[cfg(feature = "linked-routine")]
pub fn default_routine() -> (&'static str, RoundIntoFn) {
    (LINKED_ROUTINE_SYMBOL, asm_float_round)
}

#[cfg(not(feature = "linked-routine"))]
pub fn default_routine() -> (&'static str, RoundIntoFn) {
    (NATIVE_ROUTINE_SYMBOL, native_float_round)
}
