#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core ratio engine for the ronda equity screener.
//!
//! This crate is deliberately pure and synchronous: [`compute_ratios`] and
//! [`build_table`] have no side effects and no shared state, so callers
//! may fan fetches out across tickers however they like and apply the one
//! ordering-sensitive step, the stable sort, once at the end.

/// The version of the ronda-core crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod fundamentals;
pub mod ratio;
pub mod source;
pub mod table;

// Re-exports
pub use error::{Result, ScreenError};
pub use fundamentals::RawFundamentals;
pub use ratio::{DerivedRatios, compute_ratios, divide, round2};
pub use source::{FundamentalsSource, GrowthHorizon, GrowthSource};
pub use table::{ScreenRow, ScreenTable, SortKey, SortOrder, build_table};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }
}
