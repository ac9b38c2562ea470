//! Finviz EPS growth scraper for the ronda screener.
//!
//! Analyst EPS growth estimates are not part of the Yahoo quoteSummary
//! payload, so this crate scrapes them from the Finviz snapshot table
//! ("EPS next Y" / "EPS next 5Y") and exposes them through the
//! [`ronda_core::GrowthSource`] seam.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ronda_core::GrowthHorizon;
//! use ronda_finviz::FinvizClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FinvizClient::new();
//!     let growth = client.eps_growth_pct("AMZN", GrowthHorizon::NextYear).await?;
//!     println!("EPS next Y: {growth:?}%");
//!     Ok(())
//! }
//! ```
//!
//! An estimate Finviz renders as "-" comes back as `Ok(None)`; only
//! transport-level failures are errors.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod error;
mod snapshot;

pub use client::FinvizClient;
pub use error::FinvizError;
pub use snapshot::parse_snapshot_percent;

/// Result type for Finviz scraper operations.
pub type Result<T> = std::result::Result<T, FinvizError>;
