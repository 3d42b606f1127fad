//! Toolkit - Agent Tools
//!
//! Stock lookup tools that implement `agent_core::Tool`. Provider failures
//! never escape a tool; they are rendered into the output string the model
//! sees.

mod stock_info;
mod stock_price;

pub use stock_info::StockInfoTool;
pub use stock_price::StockPriceTool;

/// Session-state key holding previously looked-up tickers
pub const RECENT_SEARCHES_KEY: &str = "recent_searches";
