//! Mock Market Data Client
//!
//! For testing and demo purposes. Returns realistic static quotes; unknown
//! symbols come back as empty quotes, the way the real provider answers for
//! tickers it has no data on.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal_macros::dec;

use super::MarketData;
use crate::error::{MarketError, Result};
use crate::model::TickerQuote;

/// Mock market data client with static quotes
#[derive(Default)]
pub struct MockMarketData {
    overrides: HashMap<String, TickerQuote>,
    fail_with: Option<String>,
}

impl MockMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the quote served for a symbol
    pub fn with_quote(mut self, quote: TickerQuote) -> Self {
        self.overrides.insert(quote.symbol.clone(), quote);
        self
    }

    /// A client whose every call fails with a provider error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            overrides: HashMap::new(),
            fail_with: Some(message.into()),
        }
    }

    /// Built-in quote table
    fn base_quote(&self, symbol: &str) -> Option<TickerQuote> {
        // (regular/current price, target, name, sector, industry)
        let (price, target, name, sector, industry) = match symbol {
            "AAPL" => (
                dec!(231.44),
                dec!(252.50),
                "Apple Inc.",
                "Technology",
                "Consumer Electronics",
            ),
            "MSFT" => (
                dec!(424.20),
                dec!(500.00),
                "Microsoft Corporation",
                "Technology",
                "Software - Infrastructure",
            ),
            "GOOGL" => (
                dec!(178.35),
                dec!(205.00),
                "Alphabet Inc.",
                "Communication Services",
                "Internet Content & Information",
            ),
            "AMZN" => (
                dec!(219.50),
                dec!(246.00),
                "Amazon.com, Inc.",
                "Consumer Cyclical",
                "Internet Retail",
            ),
            "NVDA" => (
                dec!(138.80),
                dec!(170.00),
                "NVIDIA Corporation",
                "Technology",
                "Semiconductors",
            ),
            "TSLA" => (
                dec!(342.10),
                dec!(295.00),
                "Tesla, Inc.",
                "Consumer Cyclical",
                "Auto Manufacturers",
            ),
            // Delisted: profile survives, price data does not.
            "YELLQ" => {
                return Some(TickerQuote::empty(symbol).with_profile(
                    "Yellow Corporation",
                    "Industrials",
                    "Trucking",
                ));
            }
            _ => return None,
        };

        Some(
            TickerQuote::empty(symbol)
                .with_regular_market_price(price)
                .with_current_price(price)
                .with_target_mean_price(target)
                .with_profile(name, sector, industry),
        )
    }
}

#[async_trait]
impl MarketData for MockMarketData {
    async fn quote(&self, symbol: &str) -> Result<TickerQuote> {
        if let Some(message) = &self.fail_with {
            return Err(MarketError::Provider(message.clone()));
        }

        let key = symbol.to_uppercase();

        if let Some(quote) = self.overrides.get(&key) {
            return Ok(quote.clone());
        }

        Ok(self
            .base_quote(&key)
            .unwrap_or_else(|| TickerQuote::empty(&key)))
    }

    async fn health_check(&self) -> bool {
        self.fail_with.is_none()
    }

    fn name(&self) -> &str {
        "MockMarketData"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_symbol_has_price_and_profile() {
        let market = MockMarketData::new();

        let quote = market.quote("aapl").await.unwrap();
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.regular_market_price, Some(dec!(231.44)));
        assert_eq!(quote.long_name.as_deref(), Some("Apple Inc."));
    }

    #[tokio::test]
    async fn test_unknown_symbol_yields_empty_quote() {
        let market = MockMarketData::new();

        let quote = market.quote("NOTREAL").await.unwrap();
        assert_eq!(quote.symbol, "NOTREAL");
        assert!(quote.regular_market_price.is_none());
        assert!(quote.long_name.is_none());
    }

    #[tokio::test]
    async fn test_delisted_symbol_keeps_profile_without_price() {
        let market = MockMarketData::new();

        let quote = market.quote("YELLQ").await.unwrap();
        assert!(quote.regular_market_price.is_none());
        assert_eq!(quote.long_name.as_deref(), Some("Yellow Corporation"));
    }

    #[tokio::test]
    async fn test_failing_client_errors() {
        let market = MockMarketData::failing("connection reset");

        let result = market.quote("AAPL").await;
        assert!(matches!(result, Err(MarketError::Provider(_))));
        assert!(!market.health_check().await);
    }

    #[tokio::test]
    async fn test_override_replaces_base_quote() {
        let market = MockMarketData::new()
            .with_quote(TickerQuote::empty("AAPL").with_regular_market_price(dec!(150)));

        let quote = market.quote("AAPL").await.unwrap();
        assert_eq!(quote.regular_market_price, Some(dec!(150)));
        assert!(quote.long_name.is_none());
    }
}
