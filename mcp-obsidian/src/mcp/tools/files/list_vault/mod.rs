//! Vault root listing tool for MCP operations

use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ListFilesInVaultRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for listing the vault root
#[derive(Default)]
pub struct ListFilesInVaultTool;

impl ListFilesInVaultTool {
    /// Creates a new instance of the ListFilesInVaultTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListFilesInVaultTool {
    fn name(&self) -> &'static str {
        "obsidian_list_files_in_vault"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let _request: ListFilesInVaultRequest = BaseToolImpl::parse_arguments(arguments)?;
        let files = context.vault.list_files_in_vault().await?;
        BaseToolImpl::create_json_response(&files)
    }
}
