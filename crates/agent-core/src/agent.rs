//! Agent Definitions
//!
//! An agent here is a configuration bundle: model identifier, instruction,
//! tools, and an optional output schema. A hosted runtime interprets the
//! bundle and runs the reasoning loop; the definition itself carries no
//! behavior beyond rendering what the runtime needs.

use std::sync::Arc;

use serde::Serialize;

use crate::error::{AgentError, Result};
use crate::output::OutputSpec;
use crate::tool::{Tool, ToolRegistry, ToolSchema};

/// A declarative agent definition
pub struct AgentDefinition {
    /// Agent identifier (unique within a deployment)
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Model identifier (e.g., "gemini-2.0-flash-001"); opaque to this crate
    pub model: String,

    /// Base instruction for the model
    pub instruction: String,

    /// Tools the runtime may dispatch on the agent's behalf
    pub tools: Arc<ToolRegistry>,

    /// Structured-output contract, if the agent answers with a record
    pub output: Option<OutputSpec>,
}

impl AgentDefinition {
    pub fn builder() -> AgentBuilder {
        AgentBuilder::new()
    }

    /// Full instruction as handed to the model: base instruction plus the
    /// tool listing and the output contract, when present.
    pub fn render_instruction(&self) -> String {
        let mut instruction = self.instruction.clone();

        if !self.tools.is_empty() {
            instruction.push_str("\n\n");
            instruction.push_str(&self.tools.instruction_section());
        }

        if let Some(output) = &self.output {
            instruction.push_str("\n\n");
            instruction.push_str(&output.format_contract());
        }

        instruction
    }

    /// Serializable projection of the definition for a hosted runtime
    pub fn manifest(&self) -> Result<AgentManifest> {
        let output_schema = match &self.output {
            Some(spec) => Some(spec.schema_json()?),
            None => None,
        };

        Ok(AgentManifest {
            name: self.name.clone(),
            description: self.description.clone(),
            model: self.model.clone(),
            instruction: self.render_instruction(),
            tools: self.tools.schemas(),
            output_key: self.output.as_ref().map(|o| o.key.clone()),
            output_schema,
        })
    }
}

/// Wire-shaped agent bundle a hosted runtime ingests
#[derive(Clone, Debug, Serialize)]
pub struct AgentManifest {
    pub name: String,
    pub description: String,
    pub model: String,
    pub instruction: String,
    pub tools: Vec<ToolSchema>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<serde_json::Value>,
}

/// Builder for agent definitions
pub struct AgentBuilder {
    name: Option<String>,
    description: String,
    model: Option<String>,
    instruction: String,
    tools: ToolRegistry,
    output: Option<OutputSpec>,
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            description: String::new(),
            model: None,
            instruction: String::new(),
            tools: ToolRegistry::new(),
            output: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn tool<T: Tool + 'static>(mut self, tool: T) -> Self {
        self.tools.register(tool);
        self
    }

    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    /// Declare a structured-output contract from a typed record
    pub fn output<T: schemars::JsonSchema>(mut self, key: impl Into<String>) -> Self {
        self.output = Some(OutputSpec::of::<T>(key));
        self
    }

    pub fn build(self) -> Result<AgentDefinition> {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AgentError::Config("Agent name is required".into()))?;
        let model = self
            .model
            .filter(|m| !m.is_empty())
            .ok_or_else(|| AgentError::Config("Model identifier is required".into()))?;

        Ok(AgentDefinition {
            name,
            description: self.description,
            model,
            instruction: self.instruction,
            tools: Arc::new(self.tools),
            output: self.output,
        })
    }
}
