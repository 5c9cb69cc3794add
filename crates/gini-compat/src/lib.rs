//! Bridge between direct-return callers and out-parameter rounding routines.
//!
//! This crate provides:
//! - the foreign signature of the rounding routines and a native port of it
//! - a per-call bridge that seeds an output slot, dispatches, and collects
//! - a registry and a shared-library loader to pick the routine at runtime
//! - `extern "C"` entry points so a host can call the bridge directly

pub mod abi;
mod bridge;
mod error;
pub mod ffi;
mod loader;
mod registry;
mod slot;
mod symbols;

pub use abi::{LINKED_ROUTINE_SYMBOL, NATIVE_ROUTINE_SYMBOL, RoundIntoFn};
pub use bridge::{BRIDGE_TARGET, Bridge};
pub use error::BridgeError;
pub use ffi::{process_gini_float, process_gini_pure};
pub use loader::ExternalLibrary;
pub use registry::{RoutineRegistry, RoutineSpec};
pub use slot::{DEFAULT_SENTINEL, OutputSlot};
pub use symbols::{canonical_symbol, lookup_candidates};
