//! Market Data Integration
//!
//! Abstraction over ticker-data providers plus the concrete clients.

mod mock;
mod yahoo;

pub use mock::MockMarketData;
pub use yahoo::YahooMarketData;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::TickerQuote;

/// Market data client trait (Strategy pattern)
///
/// Field availability on the returned quote is provider-controlled; a
/// successful call with a priceless quote is a normal outcome, not an error.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Fetch the current quote snapshot for a symbol
    async fn quote(&self, symbol: &str) -> Result<TickerQuote>;

    /// Check if the provider is reachable
    async fn health_check(&self) -> bool;

    /// Provider name
    fn name(&self) -> &str;
}
