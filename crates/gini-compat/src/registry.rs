use std::collections::BTreeMap;

use crate::abi::{NATIVE_ROUTINE_SYMBOL, RoundIntoFn, default_routine, native_float_round};
use crate::bridge::Bridge;
use crate::error::BridgeError;
use crate::symbols::canonical_symbol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineSpec {
    pub symbol: String,
}

/// In-process routines a bridge can be built over, keyed by canonical symbol.
#[derive(Debug, Default)]
pub struct RoutineRegistry {
    routines: BTreeMap<String, (RoutineSpec, RoundIntoFn)>,
}

impl RoutineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the native routine plus the default routine of the
    /// inbound entry points.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        // SAFETY: the native routine honors the out-parameter contract; the
        // default routine is vouched for by `Bridge::default_routine`.
        unsafe {
            registry.register(NATIVE_ROUTINE_SYMBOL, native_float_round);
            let (symbol, routine) = default_routine();
            registry.register(symbol, routine);
        }
        registry
    }

    /// # Safety
    ///
    /// Same contract as [`Bridge::new`] for a `'static` routine.
    pub unsafe fn register(&mut self, symbol: &str, routine: RoundIntoFn) -> RoutineSpec {
        let canonical = canonical_symbol(symbol);
        let spec = RoutineSpec {
            symbol: canonical.clone(),
        };
        log::debug!("registered {canonical}");
        self.routines.insert(canonical, (spec.clone(), routine));
        spec
    }

    pub fn spec(&self, symbol: &str) -> Option<&RoutineSpec> {
        self.routines.get(symbol).map(|entry| &entry.0)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.routines.keys().map(String::as_str)
    }

    /// Registered name `symbol` refers to: the name itself if registered,
    /// otherwise its canonical form.
    pub fn resolve(&self, symbol: &str) -> Option<&str> {
        if let Some((key, _)) = self.routines.get_key_value(symbol) {
            return Some(key.as_str());
        }
        self.routines
            .get_key_value(&canonical_symbol(symbol))
            .map(|(key, _)| key.as_str())
    }

    /// Builds a bridge over a registered routine.
    ///
    /// `symbol` may be given exactly or with cdecl decoration.
    pub fn bridge(&self, symbol: &str) -> Result<Bridge<'static>, BridgeError> {
        let (spec, routine) = self
            .resolve(symbol)
            .and_then(|resolved| self.routines.get(resolved))
            .ok_or_else(|| BridgeError::RoutineNotRegistered {
                symbol: symbol.to_string(),
            })?;
        // SAFETY: routines were accepted under the same contract in `register`.
        Ok(unsafe { Bridge::new(spec.symbol.clone(), *routine) })
    }
}
