use std::borrow::Cow;
use std::ffi::c_int;
use std::marker::PhantomData;

use crate::abi::{NATIVE_ROUTINE_SYMBOL, RoundIntoFn, default_routine, native_float_round};
use crate::error::BridgeError;
use crate::slot::{DEFAULT_SENTINEL, OutputSlot};

pub const BRIDGE_TARGET: &str = "bridge";

/// Turns an out-parameter routine into a direct-return call.
///
/// Each call seeds a fresh stack slot with the sentinel, hands the routine a
/// pointer to it, and returns whatever the slot holds afterwards. Nothing is
/// kept between calls. `'lib` ties the bridge to the library the routine was
/// resolved from, if any.
#[derive(Debug, Clone)]
pub struct Bridge<'lib> {
    symbol: Cow<'static, str>,
    routine: RoundIntoFn,
    sentinel: c_int,
    _library: PhantomData<&'lib ()>,
}

impl Bridge<'static> {
    /// Bridge over the native port of the rounding routine.
    pub fn native() -> Self {
        // SAFETY: `native_float_round` writes exactly one c_int and lives for the program.
        unsafe { Self::new(NATIVE_ROUTINE_SYMBOL, native_float_round) }
    }

    /// Bridge over the routine the inbound entry points use.
    pub fn default_routine() -> Self {
        let (symbol, routine) = default_routine();
        // SAFETY: the default routine is either the native port or the linked
        // `asm_float_round`, which the `linked-routine` feature vouches for.
        unsafe { Self::new(symbol, routine) }
    }
}

impl<'lib> Bridge<'lib> {
    /// # Safety
    ///
    /// `routine` must really have the [`RoundIntoFn`] signature, stay
    /// callable for `'lib`, and write at most one `c_int` through the output
    /// pointer it receives.
    pub unsafe fn new(symbol: impl Into<Cow<'static, str>>, routine: RoundIntoFn) -> Self {
        Self {
            symbol: symbol.into(),
            routine,
            sentinel: DEFAULT_SENTINEL,
            _library: PhantomData,
        }
    }

    pub fn with_sentinel(mut self, sentinel: c_int) -> Self {
        self.sentinel = sentinel;
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn sentinel(&self) -> c_int {
        self.sentinel
    }

    /// Rounds through the routine and returns whatever it left in the slot.
    ///
    /// A routine that never writes makes this return the sentinel, which is
    /// indistinguishable from a real result. [`Bridge::round_checked`] tells
    /// the two apart.
    pub fn round(&self, gini_value: f32) -> i32 {
        log::info!(target: BRIDGE_TARGET, "received value {gini_value:.6}");
        self.dispatch(gini_value, self.sentinel)
    }

    /// Like [`Bridge::round`], but reports an untouched slot as an error.
    ///
    /// Non-finite input is rejected before dispatch. When the slot still
    /// holds the sentinel the routine is called once more with a different
    /// sentinel: if that one survives too, nothing was written.
    pub fn round_checked(&self, gini_value: f32) -> Result<i32, BridgeError> {
        if !gini_value.is_finite() {
            return Err(BridgeError::NonFinite {
                symbol: self.symbol.to_string(),
                value: gini_value,
            });
        }

        log::info!(target: BRIDGE_TARGET, "received value {gini_value:.6}");
        let collected = self.dispatch(gini_value, self.sentinel);
        if collected != self.sentinel {
            return Ok(collected);
        }

        let alternate = alternate_sentinel(self.sentinel);
        log::warn!(
            target: BRIDGE_TARGET,
            "slot still holds sentinel {}, re-dispatching with {alternate}",
            self.sentinel
        );
        let confirmed = self.dispatch(gini_value, alternate);
        if confirmed == alternate {
            return Err(BridgeError::SlotUnwritten {
                symbol: self.symbol.to_string(),
                sentinel: self.sentinel,
            });
        }
        Ok(confirmed)
    }

    fn dispatch(&self, gini_value: f32, sentinel: c_int) -> c_int {
        let mut slot = OutputSlot::new(sentinel);
        log::info!(
            target: BRIDGE_TARGET,
            "result slot at {:p} seeded with {sentinel}",
            slot.address()
        );

        log::info!(target: BRIDGE_TARGET, "calling {}", self.symbol);
        // SAFETY: the slot outlives the call and the routine's contract was
        // accepted in `Bridge::new`.
        unsafe { (self.routine)(gini_value, slot.as_mut_ptr()) };
        log::info!(target: BRIDGE_TARGET, "returned from {}", self.symbol);

        let collected = slot.get();
        log::info!(
            target: BRIDGE_TARGET,
            "value written by {} into slot: {collected}",
            self.symbol
        );
        collected
    }
}

fn alternate_sentinel(sentinel: c_int) -> c_int {
    if sentinel == c_int::MIN {
        c_int::MAX
    } else {
        c_int::MIN
    }
}
