//! Yahoo Finance data provider for the ronda screener.
//!
//! This crate fetches per-ticker fundamentals from the Yahoo Finance
//! `quoteSummary` endpoint and maps them into
//! [`ronda_core::RawFundamentals`]. It implements the
//! [`ronda_core::FundamentalsSource`] seam, so the engine and CLI never
//! see Yahoo's wire format.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ronda_yahoo::YahooClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = YahooClient::new();
//!     let record = client.fundamentals("AAPL").await?;
//!     println!("{:?} {:?}", record.price, record.enterprise_value);
//!     Ok(())
//! }
//! ```
//!
//! Absent fields stay `None` in the resulting record; a partially missing
//! payload is not an error.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod types;

pub use client::YahooClient;
pub use error::YahooError;
pub use types::*;

/// Result type for Yahoo client operations.
pub type Result<T> = std::result::Result<T, YahooError>;
