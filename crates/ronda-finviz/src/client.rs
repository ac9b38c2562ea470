//! Finviz quote page client.

use crate::{Result, error::FinvizError, snapshot::parse_snapshot_percent};
use reqwest::Client;
use ronda_core::{GrowthHorizon, GrowthSource};

/// Base URL for Finviz quote pages.
const FINVIZ_QUOTE_URL: &str = "https://finviz.com/quote.ashx";

/// Finviz blocks requests without a browser-like User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; ronda/0.1)";

/// Snapshot-table label for a growth horizon.
const fn growth_label(horizon: GrowthHorizon) -> &'static str {
    match horizon {
        GrowthHorizon::NextYear => "EPS next Y",
        GrowthHorizon::NextFiveYears => "EPS next 5Y",
    }
}

/// Finviz EPS growth scraper.
#[derive(Debug, Clone, Default)]
pub struct FinvizClient {
    client: Client,
}

impl FinvizClient {
    /// Create a new Finviz client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Build the quote page URL for a symbol.
    fn url(&self, symbol: &str) -> String {
        format!("{FINVIZ_QUOTE_URL}?t={}", symbol.to_uppercase())
    }

    /// Fetch the EPS growth estimate for one symbol.
    ///
    /// Returns `Ok(None)` when the page has no estimate for the requested
    /// horizon; that is missing data, not a failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Finviz blocks the client.
    pub async fn eps_growth_pct(
        &self,
        symbol: &str,
        horizon: GrowthHorizon,
    ) -> Result<Option<f64>> {
        let response = self
            .client
            .get(self.url(symbol))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(FinvizError::Blocked);
        }
        if !status.is_success() {
            return Err(FinvizError::Http(status));
        }

        let html = response.text().await?;
        Ok(parse_snapshot_percent(&html, growth_label(horizon)))
    }
}

impl GrowthSource for FinvizClient {
    async fn eps_growth(
        &self,
        symbol: &str,
        horizon: GrowthHorizon,
    ) -> ronda_core::Result<Option<f64>> {
        self.eps_growth_pct(symbol, horizon)
            .await
            .map_err(Into::into)
    }
}
