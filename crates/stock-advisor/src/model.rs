//! Domain Models
//!
//! Quote data returned by the market-data provider and the structured
//! record the analysis agent answers with. Prices use `rust_decimal` -
//! never use f64 for money!

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A snapshot of provider data for one ticker.
///
/// Every field except the symbol is optional: presence is controlled by the
/// provider and varies by listing (delisted tickers keep a profile but lose
/// their price, small caps often lack analyst targets).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TickerQuote {
    /// Ticker symbol (e.g., "AAPL"), uppercased
    pub symbol: String,

    /// Regular-session market price
    pub regular_market_price: Option<Decimal>,

    /// Most recent traded price
    pub current_price: Option<Decimal>,

    /// Mean analyst price target
    pub target_mean_price: Option<Decimal>,

    /// Full company name (e.g., "Apple Inc.")
    pub long_name: Option<String>,

    /// Sector classification
    pub sector: Option<String>,

    /// Industry classification
    pub industry: Option<String>,

    /// When this snapshot was taken
    pub updated_at: DateTime<Utc>,
}

impl TickerQuote {
    /// An empty quote: just the (uppercased) symbol, no provider data
    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            regular_market_price: None,
            current_price: None,
            target_mean_price: None,
            long_name: None,
            sector: None,
            industry: None,
            updated_at: Utc::now(),
        }
    }

    pub fn with_regular_market_price(mut self, price: Decimal) -> Self {
        self.regular_market_price = Some(price);
        self
    }

    pub fn with_current_price(mut self, price: Decimal) -> Self {
        self.current_price = Some(price);
        self
    }

    pub fn with_target_mean_price(mut self, price: Decimal) -> Self {
        self.target_mean_price = Some(price);
        self
    }

    pub fn with_profile(
        mut self,
        long_name: impl Into<String>,
        sector: impl Into<String>,
        industry: impl Into<String>,
    ) -> Self {
        self.long_name = Some(long_name.into());
        self.sector = Some(sector.into());
        self.industry = Some(industry.into());
        self
    }
}

/// Buy or Sell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Recommendation {
    Buy,
    Sell,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::Buy => write!(f, "Buy"),
            Recommendation::Sell => write!(f, "Sell"),
        }
    }
}

/// Structured record the analysis agent answers with.
///
/// The Buy/Sell decision itself is made by the model from its instruction;
/// this type only pins down the shape of the answer.
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct StockAnalysis {
    /// Stock symbol
    pub ticker: String,

    /// Buy or Sell recommendation
    pub recommendation: Recommendation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_quote_uppercases_symbol() {
        let quote = TickerQuote::empty("aapl");
        assert_eq!(quote.symbol, "AAPL");
        assert!(quote.regular_market_price.is_none());
        assert!(quote.long_name.is_none());
    }

    #[test]
    fn test_quote_builders() {
        let quote = TickerQuote::empty("MSFT")
            .with_regular_market_price(dec!(424.20))
            .with_profile("Microsoft Corporation", "Technology", "Software");

        assert_eq!(quote.regular_market_price, Some(dec!(424.20)));
        assert_eq!(quote.long_name.as_deref(), Some("Microsoft Corporation"));
    }

    #[test]
    fn test_recommendation_serializes_as_buy_or_sell() {
        let analysis = StockAnalysis {
            ticker: "AAPL".into(),
            recommendation: Recommendation::Buy,
        };

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["recommendation"], "Buy");

        let bad: std::result::Result<StockAnalysis, _> =
            serde_json::from_str(r#"{"ticker": "AAPL", "recommendation": "Hold"}"#);
        assert!(bad.is_err());
    }
}
