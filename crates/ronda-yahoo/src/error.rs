//! Error types for the Yahoo Finance client.

use thiserror::Error;

/// Errors that can occur when using the Yahoo Finance quoteSummary API.
#[derive(Debug, Error)]
pub enum YahooError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error payload.
    #[error("Yahoo API error: {0}")]
    Api(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded; Yahoo throttles unauthenticated clients")]
    RateLimitExceeded,

    /// Symbol not found.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// Response contained no quoteSummary result.
    #[error("No data available for {0}")]
    NoData(String),
}

impl From<YahooError> for ronda_core::ScreenError {
    fn from(err: YahooError) -> Self {
        Self::DataFetch(err.to_string())
    }
}
