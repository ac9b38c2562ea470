//! Raw per-ticker fundamental data.
//!
//! A [`RawFundamentals`] record is the engine's only input: one bag of
//! optional fields per ticker, constructed once by a data source and
//! immutable afterwards. Any field may be absent; absence is always
//! `None`, never a numeric sentinel.

use serde::{Deserialize, Serialize};

/// Raw fundamental fields for one ticker.
///
/// All growth and ownership rates are expressed as percents on the 0-100
/// scale (12.5 means 12.5%). Sources that report decimal fractions must
/// convert before constructing a record; the engine never rescales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFundamentals {
    /// Ticker symbol, e.g. "AAPL".
    pub symbol: String,
    /// Current share price.
    pub price: Option<f64>,
    /// Analyst mean price target.
    pub target_price: Option<f64>,
    /// Trailing twelve-month P/E.
    pub trailing_pe: Option<f64>,
    /// Forward P/E.
    pub forward_pe: Option<f64>,
    /// Trailing twelve-month price/sales.
    pub price_to_sales: Option<f64>,
    /// Enterprise value.
    pub enterprise_value: Option<f64>,
    /// Trailing twelve-month gross profit.
    pub gross_profit: Option<f64>,
    /// Trailing twelve-month EBITDA.
    pub ebitda: Option<f64>,
    /// Year-over-year revenue growth, percent.
    pub revenue_growth_pct: Option<f64>,
    /// Provider-supplied trailing PEG ratio.
    pub provider_peg: Option<f64>,
    /// Fraction of shares held by insiders, percent.
    pub insider_pct: Option<f64>,
    /// Number of analysts covering the ticker.
    pub analyst_count: Option<u32>,
    /// Analyst recommendation label, e.g. "buy".
    pub recommendation: Option<String>,
    /// Forward EPS growth estimate, percent. Scraped rather than
    /// provider-supplied; see `ronda-finviz`.
    pub eps_growth_pct: Option<f64>,
}

impl RawFundamentals {
    /// An all-missing record for a symbol.
    ///
    /// Used when a fetch fails for one ticker: the batch keeps its row and
    /// every derived ratio comes out undefined.
    #[must_use]
    pub fn missing(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            price: None,
            target_price: None,
            trailing_pe: None,
            forward_pe: None,
            price_to_sales: None,
            enterprise_value: None,
            gross_profit: None,
            ebitda: None,
            revenue_growth_pct: None,
            provider_peg: None,
            insider_pct: None,
            analyst_count: None,
            recommendation: None,
            eps_growth_pct: None,
        }
    }

    /// Whether every numeric field is absent.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        self.price.is_none()
            && self.target_price.is_none()
            && self.trailing_pe.is_none()
            && self.forward_pe.is_none()
            && self.price_to_sales.is_none()
            && self.enterprise_value.is_none()
            && self.gross_profit.is_none()
            && self.ebitda.is_none()
            && self.revenue_growth_pct.is_none()
            && self.provider_peg.is_none()
            && self.insider_pct.is_none()
            && self.analyst_count.is_none()
            && self.eps_growth_pct.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_record() {
        let record = RawFundamentals::missing("TSLA");
        assert_eq!(record.symbol, "TSLA");
        assert!(record.is_missing());
        assert!(record.recommendation.is_none());
    }

    #[test]
    fn test_partial_record_not_missing() {
        let record = RawFundamentals {
            price: Some(250.0),
            ..RawFundamentals::missing("TSLA")
        };
        assert!(!record.is_missing());
    }
}
