//! Yahoo Finance Client
//!
//! Fetches quote snapshots from the Yahoo Finance `quoteSummary` endpoint,
//! requesting the `price`, `assetProfile`, and `financialData` modules.

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::MarketData;
use crate::error::{MarketError, Result};
use crate::model::TickerQuote;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const QUOTE_MODULES: &str = "price,assetProfile,financialData";

// Yahoo rejects requests without a browser-looking user agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:132.0) Gecko/20100101 Firefox/132.0";

/// Client for the Yahoo Finance quote API
pub struct YahooMarketData {
    client: Client,
    base_url: String,
}

impl Default for YahooMarketData {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooMarketData {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build from environment; `STOCK_DATA_BASE_URL` overrides the provider
    /// endpoint (useful for proxies and test servers).
    pub fn from_env() -> Self {
        match std::env::var("STOCK_DATA_BASE_URL") {
            Ok(url) if !url.is_empty() => Self::with_base_url(url),
            _ => Self::new(),
        }
    }

    async fn fetch_summary(&self, symbol: &str) -> Result<QuoteSummaryResult> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules={}",
            self.base_url, symbol, QUOTE_MODULES
        );

        tracing::debug!(%symbol, "Fetching quote summary");

        let envelope: QuoteSummaryEnvelope = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let body = envelope.quote_summary;

        if let Some(error) = body.error {
            return Err(MarketError::Provider(error.description.unwrap_or(error.code)));
        }

        body.result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.swap_remove(0))
                }
            })
            .ok_or_else(|| MarketError::NoData(symbol.to_uppercase()))
    }
}

#[async_trait]
impl MarketData for YahooMarketData {
    async fn quote(&self, symbol: &str) -> Result<TickerQuote> {
        let summary = self.fetch_summary(symbol).await?;

        let mut quote = TickerQuote::empty(symbol);

        if let Some(price) = summary.price {
            quote.regular_market_price = price.regular_market_price.and_then(|v| v.raw);
            quote.long_name = price.long_name;
        }

        if let Some(profile) = summary.asset_profile {
            quote.sector = profile.sector;
            quote.industry = profile.industry;
        }

        if let Some(financial) = summary.financial_data {
            quote.current_price = financial.current_price.and_then(|v| v.raw);
            quote.target_mean_price = financial.target_mean_price.and_then(|v| v.raw);
        }

        Ok(quote)
    }

    async fn health_check(&self) -> bool {
        self.fetch_summary("AAPL").await.is_ok()
    }

    fn name(&self) -> &str {
        "YahooFinance"
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryBody,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryBody {
    result: Option<Vec<QuoteSummaryResult>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    price: Option<PriceModule>,

    #[serde(rename = "assetProfile")]
    asset_profile: Option<AssetProfileModule>,

    #[serde(rename = "financialData")]
    financial_data: Option<FinancialDataModule>,
}

#[derive(Debug, Deserialize)]
struct PriceModule {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<RawNumber>,

    #[serde(rename = "longName")]
    long_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AssetProfileModule {
    sector: Option<String>,
    industry: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FinancialDataModule {
    #[serde(rename = "currentPrice")]
    current_price: Option<RawNumber>,

    #[serde(rename = "targetMeanPrice")]
    target_mean_price: Option<RawNumber>,
}

/// Yahoo wraps numbers as `{"raw": 231.44, "fmt": "231.44"}`
#[derive(Debug, Deserialize)]
struct RawNumber {
    raw: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE_ENVELOPE: &str = r#"{
        "quoteSummary": {
            "result": [{
                "price": {
                    "regularMarketPrice": {"raw": 231.44, "fmt": "231.44"},
                    "longName": "Apple Inc."
                },
                "assetProfile": {
                    "sector": "Technology",
                    "industry": "Consumer Electronics"
                },
                "financialData": {
                    "currentPrice": {"raw": 231.44, "fmt": "231.44"},
                    "targetMeanPrice": {"raw": 252.50, "fmt": "252.50"}
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_parse_quote_summary_envelope() {
        let envelope: QuoteSummaryEnvelope = serde_json::from_str(SAMPLE_ENVELOPE).unwrap();
        let result = &envelope.quote_summary.result.unwrap()[0];

        let price = result.price.as_ref().unwrap();
        assert_eq!(
            price.regular_market_price.as_ref().unwrap().raw,
            Some(dec!(231.44))
        );
        assert_eq!(price.long_name.as_deref(), Some("Apple Inc."));

        let financial = result.financial_data.as_ref().unwrap();
        assert_eq!(
            financial.target_mean_price.as_ref().unwrap().raw,
            Some(dec!(252.50))
        );
    }

    #[test]
    fn test_parse_error_envelope() {
        let raw = r#"{
            "quoteSummary": {
                "result": null,
                "error": {"code": "Not Found", "description": "Quote not found for ticker symbol: NOPE"}
            }
        }"#;

        let envelope: QuoteSummaryEnvelope = serde_json::from_str(raw).unwrap();
        let error = envelope.quote_summary.error.unwrap();
        assert_eq!(error.code, "Not Found");
        assert!(error.description.unwrap().contains("NOPE"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = YahooMarketData::with_base_url("http://localhost:9999/");
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
