//! Data types for Yahoo Finance quoteSummary responses.
//!
//! Yahoo wraps every numeric field as `{"raw": 1.23, "fmt": "1.23"}` and
//! omits the `raw` member when a value is unavailable. [`WrappedValue`]
//! models exactly that: an absent or format-only value decodes to `None`,
//! never to zero, so missing data stays missing all the way into
//! [`RawFundamentals`].

use ronda_core::RawFundamentals;
use serde::Deserialize;

/// A Yahoo-wrapped numeric value.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WrappedValue {
    /// The unformatted numeric value, when present.
    #[serde(default)]
    pub raw: Option<f64>,
}

/// Unwrap an optional wrapped value into a plain optional number.
fn raw(value: Option<WrappedValue>) -> Option<f64> {
    value.and_then(|v| v.raw).filter(|v| v.is_finite())
}

/// Unwrap a wrapped value into a whole count, rejecting anything outside
/// the `u32` range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn raw_count(value: Option<WrappedValue>) -> Option<u32> {
    raw(value)
        .map(f64::round)
        .filter(|v| *v >= 0.0 && *v <= f64::from(u32::MAX))
        .map(|v| v as u32)
}

/// Top-level quoteSummary envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryEnvelope {
    /// The single top-level member of every response.
    pub quote_summary: QuoteSummary,
}

/// The `quoteSummary` member: either results or an error description.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteSummary {
    /// One entry per requested symbol.
    #[serde(default)]
    pub result: Option<Vec<QuoteModules>>,
    /// Populated when the request failed server-side.
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// Server-side error description.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

/// The modules requested for one symbol.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteModules {
    /// The `financialData` module.
    #[serde(default)]
    pub financial_data: Option<FinancialData>,
    /// The `summaryDetail` module.
    #[serde(default)]
    pub summary_detail: Option<SummaryDetail>,
    /// The `defaultKeyStatistics` module.
    #[serde(default)]
    pub default_key_statistics: Option<DefaultKeyStatistics>,
}

/// Fields from the `financialData` module.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    /// Current share price.
    #[serde(default)]
    pub current_price: Option<WrappedValue>,
    /// Analyst mean price target.
    #[serde(default)]
    pub target_mean_price: Option<WrappedValue>,
    /// Year-over-year revenue growth as a decimal fraction.
    #[serde(default)]
    pub revenue_growth: Option<WrappedValue>,
    /// Trailing twelve-month EBITDA.
    #[serde(default)]
    pub ebitda: Option<WrappedValue>,
    /// Trailing twelve-month gross profit.
    #[serde(default)]
    pub gross_profits: Option<WrappedValue>,
    /// Number of analysts with a published opinion.
    #[serde(default)]
    pub number_of_analyst_opinions: Option<WrappedValue>,
    /// Recommendation label, e.g. "buy" or "hold".
    #[serde(default)]
    pub recommendation_key: Option<String>,
}

/// Fields from the `summaryDetail` module.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDetail {
    /// Trailing twelve-month P/E.
    #[serde(default, rename = "trailingPE")]
    pub trailing_pe: Option<WrappedValue>,
    /// Forward P/E.
    #[serde(default, rename = "forwardPE")]
    pub forward_pe: Option<WrappedValue>,
    /// Trailing twelve-month price/sales.
    #[serde(default)]
    pub price_to_sales_trailing12_months: Option<WrappedValue>,
}

/// Fields from the `defaultKeyStatistics` module.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultKeyStatistics {
    /// Enterprise value.
    #[serde(default)]
    pub enterprise_value: Option<WrappedValue>,
    /// Fraction of float held by insiders, decimal.
    #[serde(default)]
    pub held_percent_insiders: Option<WrappedValue>,
    /// Yahoo's own trailing PEG ratio.
    #[serde(default)]
    pub trailing_peg_ratio: Option<WrappedValue>,
}

impl QuoteModules {
    /// Map the wire modules into one [`RawFundamentals`] record.
    ///
    /// Decimal fractions (`revenueGrowth`, `heldPercentInsiders`) become
    /// percents here, the single place where rescaling happens.
    #[must_use]
    pub fn into_fundamentals(self, symbol: impl Into<String>) -> RawFundamentals {
        let financial = self.financial_data.unwrap_or_default();
        let summary = self.summary_detail.unwrap_or_default();
        let statistics = self.default_key_statistics.unwrap_or_default();

        RawFundamentals {
            symbol: symbol.into(),
            price: raw(financial.current_price),
            target_price: raw(financial.target_mean_price),
            trailing_pe: raw(summary.trailing_pe),
            forward_pe: raw(summary.forward_pe),
            price_to_sales: raw(summary.price_to_sales_trailing12_months),
            enterprise_value: raw(statistics.enterprise_value),
            gross_profit: raw(financial.gross_profits),
            ebitda: raw(financial.ebitda),
            revenue_growth_pct: raw(financial.revenue_growth).map(|v| v * 100.0),
            provider_peg: raw(statistics.trailing_peg_ratio),
            insider_pct: raw(statistics.held_percent_insiders).map(|v| v * 100.0),
            analyst_count: raw_count(financial.number_of_analyst_opinions),
            recommendation: financial.recommendation_key,
            eps_growth_pct: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_value_missing_raw() {
        // Yahoo often sends format-only values for large numbers.
        let value: WrappedValue = serde_json::from_str(r#"{"fmt": "1.2T"}"#).unwrap();
        assert_eq!(value.raw, None);

        let value: WrappedValue = serde_json::from_str(r#"{"raw": 42.5, "fmt": "42.50"}"#).unwrap();
        assert_eq!(value.raw, Some(42.5));
    }

    #[test]
    fn test_empty_wrapped_value() {
        let value: WrappedValue = serde_json::from_str("{}").unwrap();
        assert_eq!(value.raw, None);
    }

    #[test]
    fn test_into_fundamentals_rescaling() {
        let modules: QuoteModules = serde_json::from_str(
            r#"{
                "financialData": {
                    "currentPrice": {"raw": 100.0},
                    "targetMeanPrice": {"raw": 120.0},
                    "revenueGrowth": {"raw": 0.125},
                    "numberOfAnalystOpinions": {"raw": 41},
                    "recommendationKey": "buy"
                },
                "summaryDetail": {
                    "trailingPE": {"raw": 30.0}
                },
                "defaultKeyStatistics": {
                    "heldPercentInsiders": {"raw": 0.001},
                    "trailingPegRatio": {"raw": 2.1}
                }
            }"#,
        )
        .unwrap();

        let record = modules.into_fundamentals("AAPL");
        assert_eq!(record.symbol, "AAPL");
        assert_eq!(record.price, Some(100.0));
        assert_eq!(record.target_price, Some(120.0));
        // Decimal fractions become percents exactly once, here.
        assert_eq!(record.revenue_growth_pct, Some(12.5));
        assert_eq!(record.insider_pct, Some(0.1));
        assert_eq!(record.trailing_pe, Some(30.0));
        assert_eq!(record.provider_peg, Some(2.1));
        assert_eq!(record.analyst_count, Some(41));
        assert_eq!(record.recommendation.as_deref(), Some("buy"));
        // Scraped growth never comes from Yahoo.
        assert_eq!(record.eps_growth_pct, None);
        // Absent modules leave their fields missing, not zero.
        assert_eq!(record.ebitda, None);
        assert_eq!(record.enterprise_value, None);
    }

    #[test]
    fn test_raw_count_guards() {
        let wrap = |v: f64| Some(WrappedValue { raw: Some(v) });
        assert_eq!(raw_count(wrap(41.0)), Some(41));
        // A formatted count can come back fractional; round, don't truncate.
        assert_eq!(raw_count(wrap(40.6)), Some(41));
        assert_eq!(raw_count(wrap(-1.0)), None);
        assert_eq!(raw_count(wrap(f64::INFINITY)), None);
        assert_eq!(raw_count(None), None);
    }

    #[test]
    fn test_missing_modules() {
        let modules: QuoteModules = serde_json::from_str("{}").unwrap();
        let record = modules.into_fundamentals("NBIS");
        assert!(record.is_missing());
    }
}
