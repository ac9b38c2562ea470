//! Error types for the ronda screener.
//!
//! Missing fundamental data is not an error anywhere in this crate: it is
//! modeled as `None` and propagated through the ratio arithmetic. The
//! variants here cover the cases that genuinely cannot produce a row,
//! such as an unparseable sort key or a failed upstream fetch.

use thiserror::Error;

/// The main error type for screener operations.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// A sort key name did not match any table column.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Error fetching data from an external source.
    #[error("Data fetch error: {0}")]
    DataFetch(String),

    /// Error due to invalid or malformed input.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for ScreenError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for ScreenError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for screener operations.
pub type Result<T> = std::result::Result<T, ScreenError>;
