//! Stock Price Tool
//!
//! Fetches the current market price for a ticker symbol. Optionally records
//! each looked-up ticker in the session's recent-searches list.

use std::sync::Arc;

use async_trait::async_trait;

use agent_core::{
    Result as CoreResult, Tool, ToolCall, ToolContext, ToolResult, ToolSchema,
    error::AgentError, tool::ParameterSchema,
};

use super::RECENT_SEARCHES_KEY;
use crate::market::MarketData;

/// Tool for looking up current stock prices
pub struct StockPriceTool {
    market: Arc<dyn MarketData>,
    track_searches: bool,
}

impl StockPriceTool {
    pub fn new(market: Arc<dyn MarketData>) -> Self {
        Self {
            market,
            track_searches: false,
        }
    }

    /// Variant that appends each ticker to the session's recent-searches
    /// list before the lookup (skipping tickers already present).
    pub fn with_search_tracking(market: Arc<dyn MarketData>) -> Self {
        Self {
            market,
            track_searches: true,
        }
    }
}

#[async_trait]
impl Tool for StockPriceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_stock_price".into(),
            description: "Get the current market price for a stock ticker symbol.".into(),
            parameters: vec![ParameterSchema::required_string(
                "ticker",
                "Stock ticker symbol (e.g., 'AAPL')",
            )],
        }
    }

    async fn execute(&self, call: &ToolCall, ctx: &mut ToolContext<'_>) -> CoreResult<ToolResult> {
        let ticker = call
            .str_arg("ticker")
            .ok_or_else(|| AgentError::ToolValidation("Missing ticker".into()))?;

        if self.track_searches {
            ctx.state.record_unique(RECENT_SEARCHES_KEY, ticker);
        }

        let upper = ticker.to_uppercase();

        let output = match self.market.quote(ticker).await {
            Ok(quote) => match quote.regular_market_price {
                Some(price) => ToolResult::success(
                    "get_stock_price",
                    format!("The current price of {} is {} USD.", upper, price),
                ),
                None => ToolResult::success(
                    "get_stock_price",
                    format!("Could not retrieve the price for {}.", upper),
                ),
            },
            Err(e) => ToolResult::failure(
                "get_stock_price",
                format!("Error fetching stock price: {}", e),
            ),
        };

        Ok(output)
    }
}
