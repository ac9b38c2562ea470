//! Batch fetching with per-symbol failure isolation.
//!
//! One bad ticker must never abort a screen: every fetch or scrape
//! failure becomes a stderr warning plus an all-missing record, so the
//! table keeps exactly one row per requested symbol.

use ronda_core::{
    FundamentalsSource, GrowthHorizon, GrowthSource, RawFundamentals, Result, ScreenError,
};

/// Fetch fundamentals (and optionally the scraped EPS growth) for a
/// whole universe, in input order.
pub(crate) async fn fetch_universe<S, G>(
    source: &S,
    growth: Option<&G>,
    symbols: &[String],
    horizon: GrowthHorizon,
) -> Vec<RawFundamentals>
where
    S: FundamentalsSource,
    G: GrowthSource,
{
    let mut records = Vec::with_capacity(symbols.len());

    for symbol in symbols {
        println!("Retrieving: {symbol}");

        let mut record = match source.fetch(symbol).await {
            Ok(record) => record,
            Err(e) => {
                eprintln!("Warning: failed to fetch fundamentals for {symbol}: {e}");
                RawFundamentals::missing(symbol.to_uppercase())
            }
        };

        if let Some(growth_source) = growth {
            match growth_source.eps_growth(symbol, horizon).await {
                Ok(value) => record.eps_growth_pct = value,
                Err(e) => eprintln!("Warning: failed to fetch EPS growth for {symbol}: {e}"),
            }
        }

        records.push(record);
    }

    records
}

/// Parse a growth horizon flag value.
pub(crate) fn parse_growth_horizon(value: &str) -> Result<GrowthHorizon> {
    match value.trim().to_lowercase().replace('_', "-").as_str() {
        "next-y" | "1y" | "y" => Ok(GrowthHorizon::NextYear),
        "next-5y" | "5y" => Ok(GrowthHorizon::NextFiveYears),
        other => Err(ScreenError::InvalidData(format!(
            "Unknown growth horizon '{other}'; use next-y or next-5y"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl FundamentalsSource for FailingSource {
        async fn fetch(&self, _symbol: &str) -> Result<RawFundamentals> {
            Err(ScreenError::DataFetch("refused".to_string()))
        }
    }

    struct FixedGrowth(f64);

    impl GrowthSource for FixedGrowth {
        async fn eps_growth(&self, _symbol: &str, _horizon: GrowthHorizon) -> Result<Option<f64>> {
            Ok(Some(self.0))
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_row() {
        let symbols = vec!["aapl".to_string(), "msft".to_string()];
        let records = fetch_universe(
            &FailingSource,
            None::<&FixedGrowth>,
            &symbols,
            GrowthHorizon::NextYear,
        )
        .await;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].symbol, "AAPL");
        assert!(records[0].is_missing());
    }

    #[tokio::test]
    async fn test_growth_attached_to_failed_fetch() {
        let symbols = vec!["nu".to_string()];
        let records = fetch_universe(
            &FailingSource,
            Some(&FixedGrowth(21.5)),
            &symbols,
            GrowthHorizon::NextYear,
        )
        .await;

        // The scrape is independent of the provider fetch.
        assert_eq!(records[0].eps_growth_pct, Some(21.5));
    }

    #[test]
    fn test_parse_growth_horizon() {
        assert_eq!(
            parse_growth_horizon("next-y").unwrap(),
            GrowthHorizon::NextYear
        );
        assert_eq!(
            parse_growth_horizon("NEXT_5Y").unwrap(),
            GrowthHorizon::NextFiveYears
        );
        assert!(parse_growth_horizon("quarterly").is_err());
    }
}
