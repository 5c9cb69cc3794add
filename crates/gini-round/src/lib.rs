//! Native rounding of GINI values to integer scores.
//!
//! The routines under [`ported`] are the Rust counterparts of the legacy
//! rounding helpers. `gini-compat` wraps them behind the out-parameter
//! calling convention so an externally linked routine can replace them.

pub mod ported;

pub use ported::{RoundError, round_half_away_from_zero, try_round_half_away_from_zero};
