//! Tool registry for MCP operations
//!
//! The registry is built once at startup from the fixed tool catalog, filtered
//! by [`FeatureToggles`], and is read-only afterwards. It answers discovery
//! (`list_tools`) in registration order and routes invocations by name.

use super::tools::{catalog, ToolHandler};
use crate::config::FeatureToggles;
use crate::error::{ObsidianError, Result};
use crate::journal::{Clock, SystemClock};
use crate::vault::VaultClient;
use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent, Tool};
use std::collections::HashMap;
use std::sync::Arc;

/// Context shared by all tools during execution
#[derive(Clone)]
pub struct ToolContext {
    /// The vault every tool operates on
    pub vault: Arc<dyn VaultClient>,
    /// Wall clock for journal timestamps and paths
    pub clock: Arc<dyn Clock>,
}

impl ToolContext {
    /// Create a new tool context reading the system clock
    pub fn new(vault: Arc<dyn VaultClient>) -> Self {
        Self {
            vault,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

/// Trait defining the interface for all MCP tools
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Get the tool's name
    fn name(&self) -> &'static str;

    /// Get the tool's description
    fn description(&self) -> &'static str;

    /// Get the tool's JSON schema for arguments
    fn schema(&self) -> serde_json::Value;

    /// Discovery metadata for `list_tools`
    fn descriptor(&self) -> Tool {
        let schema_map = match self.schema() {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };

        Tool {
            name: self.name().into(),
            description: Some(self.description().into()),
            input_schema: Arc::new(schema_map),
            annotations: None,
        }
    }

    /// Execute the tool with the given arguments and context.
    ///
    /// Malformed arguments fail with [`ObsidianError::InvalidArgument`] before
    /// the vault is called.
    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult>;
}

/// Registry for managing MCP tools
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<ToolHandler>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from the tool catalog, keeping only the entries
    /// enabled by `toggles`.
    pub fn build(toggles: &FeatureToggles) -> Result<Self> {
        let mut registry = Self::new();
        for (enabled, make) in catalog() {
            let tool = make();
            if enabled(toggles) {
                registry.register(tool)?;
            } else {
                tracing::info!("Tool {} disabled by configuration", tool.name());
            }
        }
        tracing::debug!(
            "Tool registry ready with {} tools: {:?}",
            registry.len(),
            registry.list_tool_names()
        );
        Ok(registry)
    }

    /// Register a tool in the registry. Names must be unique.
    pub fn register(&mut self, tool: ToolHandler) -> Result<()> {
        let name = tool.name();
        if self.index.contains_key(name) {
            return Err(ObsidianError::Config(format!(
                "Tool registered twice: {name}"
            )));
        }
        self.index.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Get a tool by name
    pub fn get_tool(&self, name: &str) -> Option<&ToolHandler> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    /// List all registered tool names in registration order
    pub fn list_tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    /// Get all registered tools as Tool objects for MCP list_tools response
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(|tool| tool.descriptor()).collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Route an invocation to the named tool.
    ///
    /// Fails with [`ObsidianError::UnknownTool`] when no such tool is
    /// registered; otherwise returns whatever the tool returns.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let tool = self
            .get_tool(name)
            .ok_or_else(|| ObsidianError::UnknownTool(name.to_string()))?;
        tool.execute(arguments, context).await
    }
}

/// Base implementation providing common utility methods for MCP tools
pub struct BaseToolImpl;

impl BaseToolImpl {
    /// Parse tool arguments from a JSON map into a typed struct
    ///
    /// # Arguments
    ///
    /// * `arguments` - The JSON map of arguments from the MCP request
    ///
    /// # Returns
    ///
    /// * `Result<T>` - The parsed arguments, or `InvalidArgument` naming the
    ///   missing or mistyped field
    pub fn parse_arguments<T: serde::de::DeserializeOwned>(
        arguments: serde_json::Map<String, serde_json::Value>,
    ) -> Result<T> {
        serde_json::from_value(serde_json::Value::Object(arguments))
            .map_err(|e| ObsidianError::invalid_argument(format!("Invalid arguments: {e}")))
    }

    /// Reject empty or whitespace-only string arguments
    pub fn require_non_empty(value: &str, field: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(ObsidianError::invalid_argument(format!(
                "{field} cannot be empty"
            )));
        }
        Ok(())
    }

    /// Reject integers outside `min..=max`
    pub fn require_in_range(value: u32, field: &str, min: u32, max: u32) -> Result<()> {
        if !(min..=max).contains(&value) {
            return Err(ObsidianError::invalid_argument(format!(
                "{field} must be between {min} and {max}, got: {value}"
            )));
        }
        Ok(())
    }

    /// Create a success response with text content
    pub fn create_success_response<T: Into<String>>(content: T) -> CallToolResult {
        CallToolResult {
            content: vec![Annotated::new(
                RawContent::Text(RawTextContent {
                    text: content.into(),
                }),
                None,
            )],
            is_error: Some(false),
        }
    }

    /// Create a success response holding pretty-printed JSON
    pub fn create_json_response<T: serde::Serialize>(value: &T) -> Result<CallToolResult> {
        Ok(Self::create_success_response(serde_json::to_string_pretty(
            value,
        )?))
    }
}
