//! Yahoo Finance quoteSummary client implementation.

use crate::{
    Result,
    error::YahooError,
    types::{QuoteModules, QuoteSummaryEnvelope},
};
use reqwest::Client;
use ronda_core::{FundamentalsSource, RawFundamentals};

/// Base URL for the quoteSummary endpoint.
const YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com/v10/finance/quoteSummary";

/// Modules requested for every symbol.
const MODULES: &str = "financialData,summaryDetail,defaultKeyStatistics";

/// Yahoo rejects requests without a browser-like User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; ronda/0.1)";

/// Yahoo Finance quoteSummary client.
#[derive(Debug, Clone, Default)]
pub struct YahooClient {
    client: Client,
}

impl YahooClient {
    /// Create a new Yahoo client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Build the quoteSummary URL for a symbol.
    fn url(&self, symbol: &str) -> String {
        format!(
            "{YAHOO_BASE_URL}/{}?modules={MODULES}",
            symbol.to_uppercase()
        )
    }

    /// Fetch the requested modules for one symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the symbol is unknown, or
    /// the response carries an error payload instead of a result.
    pub async fn quote_summary(&self, symbol: &str) -> Result<QuoteModules> {
        let response = self
            .client
            .get(self.url(symbol))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        match response.status() {
            reqwest::StatusCode::TOO_MANY_REQUESTS => return Err(YahooError::RateLimitExceeded),
            reqwest::StatusCode::NOT_FOUND => {
                return Err(YahooError::SymbolNotFound(symbol.to_string()));
            }
            status if !status.is_success() => {
                let text = response.text().await.unwrap_or_default();
                return Err(YahooError::Api(format!("HTTP {status}: {text}")));
            }
            _ => {}
        }

        let text = response.text().await?;
        let envelope: QuoteSummaryEnvelope = serde_json::from_str(&text)?;

        if let Some(error) = envelope.quote_summary.error {
            let description = error
                .description
                .or(error.code)
                .unwrap_or_else(|| "unspecified error".to_string());
            return Err(YahooError::Api(description));
        }

        envelope
            .quote_summary
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.swap_remove(0))
                }
            })
            .ok_or_else(|| YahooError::NoData(symbol.to_string()))
    }

    /// Fetch raw fundamentals for one symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying request fails; a successful
    /// response with absent fields yields a partially-populated record.
    pub async fn fundamentals(&self, symbol: &str) -> Result<RawFundamentals> {
        let modules = self.quote_summary(symbol).await?;
        Ok(modules.into_fundamentals(symbol.to_uppercase()))
    }
}

impl FundamentalsSource for YahooClient {
    async fn fetch(&self, symbol: &str) -> ronda_core::Result<RawFundamentals> {
        self.fundamentals(symbol).await.map_err(Into::into)
    }
}
