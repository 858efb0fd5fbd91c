//! MCP server exposing the vault tools over the protocol

use super::error_handling::McpErrorHandler;
use super::tool_registry::{ToolContext, ToolRegistry};
use crate::config::Config;
use crate::error::Result;
use crate::vault::ObsidianRestClient;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use std::sync::Arc;

const INSTRUCTIONS: &str = "Tools for reading, searching and editing an Obsidian vault through \
the Local REST API plugin. File paths are relative to the vault root. Use \
obsidian_list_files_in_vault to discover content, the search tools to find notes, and the \
content tools to modify them.";

/// MCP server for an Obsidian vault
#[derive(Clone)]
pub struct McpServer {
    tool_registry: Arc<ToolRegistry>,
    /// Tool context containing shared state for tool execution
    pub tool_context: Arc<ToolContext>,
}

impl McpServer {
    /// Create a server talking to the vault described by `config`.
    ///
    /// The tool set is fixed here from the feature toggles and never changes
    /// afterwards.
    pub fn new(config: &Config) -> Result<Self> {
        let vault = ObsidianRestClient::new(&config.vault)?;
        tracing::info!("Using Obsidian Local REST API at {}", vault.base_url());

        let registry = ToolRegistry::build(&config.toggles)?;
        Ok(Self::with_context(registry, ToolContext::new(Arc::new(vault))))
    }

    /// Create a server from an already built registry and context
    pub fn with_context(registry: ToolRegistry, context: ToolContext) -> Self {
        Self {
            tool_registry: Arc::new(registry),
            tool_context: Arc::new(context),
        }
    }

    /// Tool descriptors in registration order
    pub fn list_tool_descriptors(&self) -> Vec<Tool> {
        self.tool_registry.list_tools()
    }

    /// Names of the registered tools in registration order
    pub fn list_tool_names(&self) -> Vec<&'static str> {
        self.tool_registry.list_tool_names()
    }

    /// Invoke a tool by name.
    ///
    /// Missing arguments are treated as an empty mapping. Failures are
    /// converted by [`McpErrorHandler`].
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        tracing::debug!("Calling tool {} with arguments {:?}", name, arguments);

        let result = self
            .tool_registry
            .dispatch(name, arguments.unwrap_or_default(), &self.tool_context)
            .await
            .map_err(|e| McpErrorHandler::handle_error(e, name))?;

        tracing::debug!("Tool {} completed", name);
        Ok(result)
    }
}

impl ServerHandler for McpServer {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        tracing::debug!("Listing {} tools", self.tool_registry.len());
        Ok(ListToolsResult {
            tools: self.list_tool_descriptors(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.call(request.name.as_ref(), request.arguments).await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities {
                prompts: None,
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                resources: None,
                logging: None,
                completions: None,
                experimental: None,
            },
            server_info: Implementation {
                name: "mcp-obsidian".into(),
                version: crate::VERSION.into(),
            },
            instructions: Some(INSTRUCTIONS.into()),
        }
    }
}
