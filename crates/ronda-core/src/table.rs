//! Screen table assembly and sorting.
//!
//! [`build_table`] merges each raw record with its derived ratios into one
//! row per ticker and stable-sorts the rows by a chosen numeric column.
//! Rows are never dropped for missing data; an undefined sort key compares
//! greater than every defined value, so such rows land last in ascending
//! order and first in descending order.

use crate::error::{Result, ScreenError};
use crate::fundamentals::RawFundamentals;
use crate::ratio::{DerivedRatios, compute_ratios};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// One table row: the raw fundamentals and the ratios derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenRow {
    /// The raw record as fetched.
    pub fundamentals: RawFundamentals,
    /// The ratios computed from it.
    pub ratios: DerivedRatios,
}

impl ScreenRow {
    /// The row's ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.fundamentals.symbol
    }
}

/// Numeric column a [`ScreenTable`] can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Current share price.
    Price,
    /// Analyst mean price target.
    Target,
    /// Percent upside to the analyst target.
    Upside,
    /// Trailing P/E.
    TrailingPe,
    /// Forward P/E.
    ForwardPe,
    /// Price/sales.
    PriceToSales,
    /// Forward EPS growth percent.
    EpsGrowth,
    /// Revenue growth percent.
    RevenueGrowth,
    /// Trailing PEG computed from trailing P/E.
    TrailingPeg,
    /// Forward PEG computed from forward P/E.
    ForwardPeg,
    /// EV-based PEG.
    EvPeg,
    /// Provider-supplied trailing PEG.
    ProviderPeg,
    /// EV/EBITDA.
    EvEbitda,
    /// EV/gross profit.
    EvGp,
    /// EV/GP over revenue growth.
    EvGpRevGrowth,
    /// Insider ownership percent.
    Insiders,
    /// Analyst count.
    Analysts,
}

impl SortKey {
    /// Every sort key, in display order.
    pub const ALL: &'static [Self] = &[
        Self::Price,
        Self::Target,
        Self::Upside,
        Self::TrailingPe,
        Self::ForwardPe,
        Self::PriceToSales,
        Self::EpsGrowth,
        Self::RevenueGrowth,
        Self::TrailingPeg,
        Self::ForwardPeg,
        Self::EvPeg,
        Self::ProviderPeg,
        Self::EvEbitda,
        Self::EvGp,
        Self::EvGpRevGrowth,
        Self::Insiders,
        Self::Analysts,
    ];

    /// Canonical name, as accepted by [`SortKey::from_str`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Target => "target",
            Self::Upside => "upside",
            Self::TrailingPe => "pe",
            Self::ForwardPe => "forward_pe",
            Self::PriceToSales => "ps",
            Self::EpsGrowth => "eps_growth",
            Self::RevenueGrowth => "revenue_growth",
            Self::TrailingPeg => "peg",
            Self::ForwardPeg => "forward_peg",
            Self::EvPeg => "ev_peg",
            Self::ProviderPeg => "provider_peg",
            Self::EvEbitda => "ev_ebitda",
            Self::EvGp => "ev_gp",
            Self::EvGpRevGrowth => "ev_gp_rg",
            Self::Insiders => "insiders",
            Self::Analysts => "analysts",
        }
    }

    /// The value of this column for a row, undefined values as `None`.
    #[must_use]
    pub fn value(&self, row: &ScreenRow) -> Option<f64> {
        let raw = &row.fundamentals;
        let derived = &row.ratios;
        match self {
            Self::Price => raw.price,
            Self::Target => raw.target_price,
            Self::Upside => derived.upside_pct,
            Self::TrailingPe => raw.trailing_pe,
            Self::ForwardPe => raw.forward_pe,
            Self::PriceToSales => raw.price_to_sales,
            Self::EpsGrowth => raw.eps_growth_pct,
            Self::RevenueGrowth => raw.revenue_growth_pct,
            Self::TrailingPeg => derived.trailing_peg,
            Self::ForwardPeg => derived.forward_peg,
            Self::EvPeg => derived.ev_peg,
            Self::ProviderPeg => raw.provider_peg,
            Self::EvEbitda => derived.ev_to_ebitda,
            Self::EvGp => derived.ev_to_gross_profit,
            Self::EvGpRevGrowth => derived.ev_gp_to_rev_growth,
            Self::Insiders => raw.insider_pct,
            Self::Analysts => raw.analyst_count.map(f64::from),
        }
    }
}

impl FromStr for SortKey {
    type Err = ScreenError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .find(|key| key.as_str() == normalized)
            .copied()
            .ok_or_else(|| ScreenError::UnknownSortKey(s.to_string()))
    }
}

/// Sort direction for [`build_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Smallest defined value first, undefined last.
    #[default]
    Ascending,
    /// Largest defined value first, undefined first.
    Descending,
}

/// Ordered collection of screen rows.
///
/// Row order is deterministic for a given input order, key, and direction: the
/// sort is stable, so ties keep the original ticker order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenTable {
    rows: Vec<ScreenRow>,
    sort_key: SortKey,
    sort_order: SortOrder,
}

impl ScreenTable {
    /// The rows in sorted order.
    #[must_use]
    pub fn rows(&self) -> &[ScreenRow] {
        &self.rows
    }

    /// Consumes self and returns the rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<ScreenRow> {
        self.rows
    }

    /// The column the table is sorted by.
    #[must_use]
    pub const fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// The sort direction.
    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Undefined compares greater than any defined value, in both directions.
fn cmp_values(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Build the screen table for a batch of raw records.
///
/// Applies [`compute_ratios`] to each record and stable-sorts the merged
/// rows by `key`. Exactly one row comes out per record: missing data never
/// drops a row, and filtering for display is the caller's explicit step.
#[must_use]
pub fn build_table(records: Vec<RawFundamentals>, key: SortKey, order: SortOrder) -> ScreenTable {
    let mut rows: Vec<ScreenRow> = records
        .into_iter()
        .map(|fundamentals| {
            let ratios = compute_ratios(&fundamentals);
            ScreenRow {
                fundamentals,
                ratios,
            }
        })
        .collect();

    match order {
        SortOrder::Ascending => rows.sort_by(|a, b| cmp_values(key.value(a), key.value(b))),
        SortOrder::Descending => rows.sort_by(|a, b| cmp_values(key.value(b), key.value(a))),
    }

    ScreenTable {
        rows,
        sort_key: key,
        sort_order: order,
    }
}
