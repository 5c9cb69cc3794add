use std::ffi::c_int;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    #[error("routine not registered: {symbol}")]
    RoutineNotRegistered { symbol: String },

    #[error("routine {symbol} left the output slot unwritten (sentinel {sentinel})")]
    SlotUnwritten { symbol: String, sentinel: c_int },

    #[error("refusing to pass non-finite value {value} to {symbol}")]
    NonFinite { symbol: String, value: f32 },

    #[error("failed to load library {path}: {message}")]
    LibraryLoad { path: String, message: String },

    #[error("symbol {symbol} not found in {path}")]
    SymbolNotFound { symbol: String, path: String },
}
