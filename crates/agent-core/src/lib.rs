//! # agent-core
//!
//! Declarative agent definitions for hosted LLM runtimes, with an extensible
//! tool system and per-session state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   AgentDefinition                            │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │ Instruction │  │    Tools    │  │   OutputSpec        │  │
//! │  │  + model id │──│   Registry  │──│   (JSON Schema)     │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘  │
//! └───────────────────────────┬─────────────────────────────────┘
//!                             │ manifest()
//!                  hosted agent runtime (external)
//! ```
//!
//! The reasoning loop, model invocation, and tool-call scheduling all live in
//! the external runtime. This crate produces what that runtime consumes: the
//! agent bundle, the tool implementations it dispatches to, and the session
//! state those tools read and write.

pub mod agent;
pub mod error;
pub mod output;
pub mod state;
pub mod tool;

pub use agent::{AgentBuilder, AgentDefinition, AgentManifest};
pub use error::{AgentError, Result};
pub use output::OutputSpec;
pub use state::{MemoryStateStore, Session, SessionId, SessionState, StateStore};
pub use tool::{Tool, ToolCall, ToolContext, ToolRegistry, ToolResult, ToolSchema};
