//! Input side of the GINI bridge.
//!
//! This crate provides:
//! - **Indicator parsing** for World Bank `SI.POV.GINI` JSON responses
//! - **Latest-value selection** of the observation fed to the bridge
//! - **History** of the observations, oldest first
//!
//! Responses are read from text or files; fetching them is left to the caller.

pub mod error;
pub mod indicator;
pub mod selection;

pub use error::{IoError, Result};
pub use indicator::{
    DATE_RANGE, GiniRecord, INDICATOR, LabeledId, parse_indicator_response, read_indicator_file,
    validate_country_code,
};
pub use selection::{LatestGini, find_latest_valid, history};
