//! Agent Presets
//!
//! The five stock-agent definitions this crate ships, from a bare assistant
//! up to the structured Buy/Sell advisor. Each returns an
//! [`AgentDefinition`] for a hosted runtime to execute.

use std::sync::Arc;

use rust_decimal::Decimal;

use agent_core::{AgentDefinition, Result as CoreResult};

use crate::STOCK_ADVISOR_PROMPT;
use crate::market::MarketData;
use crate::model::StockAnalysis;
use crate::toolkit::{StockInfoTool, StockPriceTool};

/// Default model for the tool-using agents
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-001";

/// Model for the structured-output advisor
pub const ADVISOR_MODEL: &str = "gemini-2.0-flash";

/// A plain assistant with no tools
pub fn basic_agent() -> CoreResult<AgentDefinition> {
    AgentDefinition::builder()
        .name("root_agent")
        .model(DEFAULT_MODEL)
        .description("A helpful assistant.")
        .instruction("Answer the user's query.")
        .build()
}

/// An agent that answers price questions with the `get_stock_price` tool
pub fn price_agent(market: Arc<dyn MarketData>) -> CoreResult<AgentDefinition> {
    AgentDefinition::builder()
        .name("tool_agent")
        .model(DEFAULT_MODEL)
        .description("An agent that provides current stock prices.")
        .instruction("Answer user questions about stock prices using the get_stock_price tool.")
        .tool(StockPriceTool::new(market))
        .build()
}

/// Like [`price_agent`], but every looked-up ticker is remembered in the
/// session's recent-searches list.
pub fn stateful_price_agent(market: Arc<dyn MarketData>) -> CoreResult<AgentDefinition> {
    AgentDefinition::builder()
        .name("stateful_agent")
        .model(DEFAULT_MODEL)
        .description("An agent that provides current stock prices and remembers recent searches.")
        .instruction("Answer user questions about stock prices using the get_stock_price tool.")
        .tool(StockPriceTool::with_search_tracking(market))
        .build()
}

/// An agent with both the price and the company-info tool
pub fn multi_tool_agent(market: Arc<dyn MarketData>) -> CoreResult<AgentDefinition> {
    AgentDefinition::builder()
        .name("multi_tool_agent")
        .model(DEFAULT_MODEL)
        .description("An agent that provides current stock prices and company info.")
        .instruction(
            "Answer user questions about stock prices and company info using the \
             get_stock_price and get_stock_info tools.",
        )
        .tool(StockPriceTool::with_search_tracking(market.clone()))
        .tool(StockInfoTool::new(market))
        .build()
}

/// The structured advisor: answers with a [`StockAnalysis`] record stored
/// under the `stock_analysis` key. The Buy/Sell comparison lives in the
/// instruction; the model makes the call, not this crate.
pub fn structured_agent() -> CoreResult<AgentDefinition> {
    AgentDefinition::builder()
        .name("structured_agent")
        .model(ADVISOR_MODEL)
        .description("An agent with structured output")
        .instruction(STOCK_ADVISOR_PROMPT)
        .output::<StockAnalysis>("stock_analysis")
        .build()
}

/// Fetch the numbers the advisor instruction refers to: current price and
/// mean analyst target for a ticker. Absent fields and provider failures
/// both read as zero, so prompt construction never fails.
pub async fn analysis_inputs(market: &dyn MarketData, ticker: &str) -> (Decimal, Decimal) {
    match market.quote(ticker).await {
        Ok(quote) => (
            quote.current_price.unwrap_or(Decimal::ZERO),
            quote.target_mean_price.unwrap_or(Decimal::ZERO),
        ),
        Err(e) => {
            tracing::warn!(%ticker, error = %e, "Quote lookup failed; defaulting to zero");
            (Decimal::ZERO, Decimal::ZERO)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::market::MockMarketData;
    use crate::model::{Recommendation, TickerQuote};

    #[test]
    fn test_basic_agent_has_no_tools() {
        let agent = basic_agent().unwrap();
        assert_eq!(agent.name, "root_agent");
        assert!(agent.tools.is_empty());
        assert!(agent.output.is_none());
    }

    #[test]
    fn test_price_agent_registers_price_tool() {
        let agent = price_agent(Arc::new(MockMarketData::new())).unwrap();
        assert_eq!(agent.tools.names(), vec!["get_stock_price"]);
    }

    #[test]
    fn test_multi_tool_agent_lists_tools_in_order() {
        let agent = multi_tool_agent(Arc::new(MockMarketData::new())).unwrap();
        assert_eq!(
            agent.tools.names(),
            vec!["get_stock_price", "get_stock_info"]
        );

        let manifest = agent.manifest().unwrap();
        assert_eq!(manifest.tools.len(), 2);
        assert_eq!(manifest.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_structured_agent_declares_output_contract() {
        let agent = structured_agent().unwrap();

        let output = agent.output.as_ref().unwrap();
        assert_eq!(output.key, "stock_analysis");

        let schema = output.schema_json().unwrap();
        let properties = schema.get("properties").unwrap();
        assert!(properties.get("ticker").is_some());
        assert!(properties.get("recommendation").is_some());

        let rendered = agent.render_instruction();
        assert!(rendered.contains("## Output Format"));
    }

    #[test]
    fn test_structured_agent_decodes_model_reply() {
        let agent = structured_agent().unwrap();
        let output = agent.output.as_ref().unwrap();

        let analysis: StockAnalysis = output
            .decode("```json\n{\"ticker\": \"AAPL\", \"recommendation\": \"Buy\"}\n```")
            .unwrap();
        assert_eq!(analysis.ticker, "AAPL");
        assert_eq!(analysis.recommendation, Recommendation::Buy);

        let bad: CoreResult<StockAnalysis> =
            output.decode(r#"{"ticker": "AAPL", "recommendation": "Hold"}"#);
        assert!(bad.is_err());
    }

    #[tokio::test]
    async fn test_analysis_inputs_reads_current_and_target() {
        let market = MockMarketData::new().with_quote(
            TickerQuote::empty("AAPL")
                .with_current_price(dec!(100))
                .with_target_mean_price(dec!(120)),
        );

        let (current, target) = analysis_inputs(&market, "AAPL").await;
        assert_eq!(current, dec!(100));
        assert_eq!(target, dec!(120));
    }

    #[tokio::test]
    async fn test_analysis_inputs_defaults_to_zero() {
        let market = MockMarketData::new();
        let (current, target) = analysis_inputs(&market, "NOTREAL").await;
        assert_eq!(current, Decimal::ZERO);
        assert_eq!(target, Decimal::ZERO);

        let failing = MockMarketData::failing("boom");
        let (current, target) = analysis_inputs(&failing, "AAPL").await;
        assert_eq!(current, Decimal::ZERO);
        assert_eq!(target, Decimal::ZERO);
    }
}
