//! Error types for gini-io

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IoError>;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("World Bank API error: {0}")]
    Api(String),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("Invalid country code '{0}': expected three letters (e.g. ARG)")]
    InvalidCountryCode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
