//! # stock-advisor
//!
//! Stock market agent definitions for a hosted LLM runtime: quote lookup
//! tools backed by a market-data provider, per-session search history, and a
//! structured Buy/Sell advisor.
//!
//! ## Presets
//!
//! The crate ships five agents of increasing capability:
//!
//! ```text
//! basic_agent            plain assistant, no tools
//! price_agent            + get_stock_price
//! stateful_price_agent   + recent-searches session state
//! multi_tool_agent       + get_stock_info
//! structured_agent       + StockAnalysis output schema (no tools)
//! ```
//!
//! All market access goes through the [`market::MarketData`] trait; swap in
//! [`market::MockMarketData`] for tests and demos, or
//! [`market::YahooMarketData`] for live quotes. The reasoning loop itself is
//! the hosted runtime's job - these definitions only describe what it should
//! run.

pub mod agents;
pub mod error;
pub mod market;
pub mod model;
pub mod toolkit;

pub use error::{MarketError, Result};
pub use market::{MarketData, MockMarketData, YahooMarketData};
pub use model::{Recommendation, StockAnalysis, TickerQuote};
pub use toolkit::{RECENT_SEARCHES_KEY, StockInfoTool, StockPriceTool};

/// Instruction for the structured advisor agent
pub const STOCK_ADVISOR_PROMPT: &str = r#"You are a stock advisor. Analyze the stock ticker provided by the user.
Return a Buy or Sell recommendation in JSON format.

For each ticker, look at the price and the target price to make a decision.
If target price > current price: recommend Buy
Otherwise: recommend Sell"#;
