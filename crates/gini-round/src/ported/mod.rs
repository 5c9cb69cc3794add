//! Migrated rounding routines.

mod rounding;

pub use rounding::{RoundError, round_half_away_from_zero, try_round_half_away_from_zero};
