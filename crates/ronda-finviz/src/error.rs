//! Error types for the Finviz scraper.

use thiserror::Error;

/// Errors that can occur when scraping Finviz.
#[derive(Debug, Error)]
pub enum FinvizError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Finviz answered with a non-success status.
    #[error("Finviz returned HTTP {0}")]
    Http(reqwest::StatusCode),

    /// Rate limit or bot detection.
    #[error("Request blocked by Finviz; slow down or change User-Agent")]
    Blocked,
}

impl From<FinvizError> for ronda_core::ScreenError {
    fn from(err: FinvizError) -> Self {
        Self::DataFetch(err.to_string())
    }
}
