//! Tool System
//!
//! Callable functions an agent's hosted runtime may invoke during its
//! reasoning loop. This crate only defines and dispatches tools; deciding
//! *when* to call one is the runtime's job.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{AgentError, Result};
use crate::state::{SessionId, SessionState};

/// Tool call request from the runtime
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool identifier
    pub name: String,

    /// Arguments as key-value pairs
    pub arguments: HashMap<String, serde_json::Value>,

    /// Optional call ID for tracking
    #[serde(default)]
    pub id: Option<String>,
}

impl ToolCall {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: HashMap::new(),
            id: None,
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.arguments.insert(name.into(), value);
        self
    }

    /// Read a string argument
    pub fn str_arg(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).and_then(|v| v.as_str())
    }
}

/// Result from tool execution
///
/// `output` is what the model sees. Tools render provider failures into it
/// instead of propagating them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolResult {
    /// Tool that was called
    pub name: String,

    /// Call ID (if provided in request)
    pub id: Option<String>,

    /// Whether execution succeeded
    pub success: bool,

    /// Output (answer or failure message)
    pub output: String,
}

impl ToolResult {
    pub fn success(name: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            success: true,
            output: output.into(),
        }
    }

    pub fn failure(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            success: false,
            output: error.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Parameter definition for tool schema
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParameterSchema {
    /// Parameter name
    pub name: String,

    /// JSON Schema type (string, number, boolean, object, array)
    #[serde(rename = "type")]
    pub param_type: String,

    /// Human-readable description
    pub description: String,

    /// Whether this parameter is required
    #[serde(default)]
    pub required: bool,
}

impl ParameterSchema {
    /// Shorthand for a required string parameter
    pub fn required_string(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: "string".into(),
            description: description.into(),
            required: true,
        }
    }
}

/// Tool definition schema, handed to the runtime for function calling
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Unique tool identifier
    pub name: String,

    /// Human-readable description (shown to the model)
    pub description: String,

    /// Parameter definitions
    pub parameters: Vec<ParameterSchema>,
}

/// Per-call view of the session, passed to tools by the runtime.
///
/// The runtime persists state changes after the call returns.
pub struct ToolContext<'a> {
    /// Session the call belongs to
    pub session_id: &'a SessionId,

    /// Mutable session state
    pub state: &'a mut SessionState,
}

impl<'a> ToolContext<'a> {
    pub fn new(session_id: &'a SessionId, state: &'a mut SessionState) -> Self {
        Self { session_id, state }
    }
}

/// Tool trait - implement to add new capabilities
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool's schema for function calling
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments and session context
    async fn execute(&self, call: &ToolCall, ctx: &mut ToolContext<'_>) -> Result<ToolResult>;

    /// Validate arguments before execution (optional)
    fn validate(&self, call: &ToolCall) -> Result<()> {
        let schema = self.schema();

        for param in &schema.parameters {
            if param.required && !call.arguments.contains_key(&param.name) {
                return Err(AgentError::ToolValidation(format!(
                    "Missing required parameter: {}",
                    param.name
                )));
            }
        }

        Ok(())
    }
}

/// Registry for an agent's tools.
///
/// Registration order is preserved: an agent definition lists its tools in a
/// meaningful order and the manifest must reproduce it.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    by_name: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new tool. Re-registering a name replaces the earlier tool
    /// in place.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.register_arc(Arc::new(tool));
    }

    /// Register a shared tool
    pub fn register_arc(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.schema().name;
        if let Some(&idx) = self.by_name.get(&name) {
            self.tools[idx] = tool;
        } else {
            self.by_name.insert(name, self.tools.len());
            self.tools.push(tool);
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.by_name.get(name).map(|&idx| self.tools[idx].clone())
    }

    /// Execute a tool call against a session context
    pub async fn execute(&self, call: &ToolCall, ctx: &mut ToolContext<'_>) -> Result<ToolResult> {
        let tool = self
            .get(&call.name)
            .ok_or_else(|| AgentError::ToolNotFound(call.name.clone()))?;

        tool.validate(call)?;

        tracing::debug!(tool = %call.name, session = %ctx.session_id, "Executing tool");
        tool.execute(call, ctx).await
    }

    /// Get all tool schemas, in registration order
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|t| t.schema()).collect()
    }

    /// Get tool names, in registration order
    pub fn names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.schema().name).collect()
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Render the instruction section describing available tools
    pub fn instruction_section(&self) -> String {
        let mut section = String::from("## Available Tools\n\n");

        for schema in self.schemas() {
            section.push_str(&format!("### {}\n", schema.name));
            section.push_str(&format!("{}\n", schema.description));

            if !schema.parameters.is_empty() {
                section.push_str("**Parameters:**\n");
                for param in &schema.parameters {
                    let required = if param.required { " (required)" } else { "" };
                    section.push_str(&format!(
                        "- `{}` ({}){}: {}\n",
                        param.name, param.param_type, required, param.description
                    ));
                }
            }
            section.push('\n');
        }

        section
    }
}
