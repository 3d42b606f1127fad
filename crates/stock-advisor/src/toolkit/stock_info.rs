//! Stock Info Tool
//!
//! Fetches company name, sector, and industry for a ticker symbol.

use std::sync::Arc;

use async_trait::async_trait;

use agent_core::{
    Result as CoreResult, Tool, ToolCall, ToolContext, ToolResult, ToolSchema,
    error::AgentError, tool::ParameterSchema,
};

use crate::market::MarketData;

/// Tool for looking up company profile information
pub struct StockInfoTool {
    market: Arc<dyn MarketData>,
}

impl StockInfoTool {
    pub fn new(market: Arc<dyn MarketData>) -> Self {
        Self { market }
    }
}

#[async_trait]
impl Tool for StockInfoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_stock_info".into(),
            description: "Get the company name, sector, and industry for a stock ticker symbol."
                .into(),
            parameters: vec![ParameterSchema::required_string(
                "ticker",
                "Stock ticker symbol (e.g., 'AAPL')",
            )],
        }
    }

    async fn execute(&self, call: &ToolCall, _ctx: &mut ToolContext<'_>) -> CoreResult<ToolResult> {
        let ticker = call
            .str_arg("ticker")
            .ok_or_else(|| AgentError::ToolValidation("Missing ticker".into()))?;

        let upper = ticker.to_uppercase();

        let output = match self.market.quote(ticker).await {
            Ok(quote) => match quote.long_name {
                Some(name) => {
                    let sector = quote.sector.as_deref().unwrap_or("unknown");
                    let industry = quote.industry.as_deref().unwrap_or("unknown");
                    ToolResult::success(
                        "get_stock_info",
                        format!(
                            "The company name for {} is {}. The sector is {} and the industry is {}.",
                            upper, name, sector, industry
                        ),
                    )
                }
                None => ToolResult::success(
                    "get_stock_info",
                    format!("Could not retrieve the company name for {}.", upper),
                ),
            },
            Err(e) => ToolResult::failure(
                "get_stock_info",
                format!("Error fetching stock info: {}", e),
            ),
        };

        Ok(output)
    }
}
