//! Directory listing tool for MCP operations

use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ListFilesInDirRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for listing a directory inside the vault
#[derive(Default)]
pub struct ListFilesInDirTool;

impl ListFilesInDirTool {
    /// Creates a new instance of the ListFilesInDirTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ListFilesInDirTool {
    fn name(&self) -> &'static str {
        "obsidian_list_files_in_dir"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "dirpath": {
                    "type": "string",
                    "description": "Path to list files from (relative to your vault root). Note that empty directories will not be returned."
                }
            },
            "required": ["dirpath"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: ListFilesInDirRequest = BaseToolImpl::parse_arguments(arguments)?;
        BaseToolImpl::require_non_empty(&request.dirpath, "dirpath")?;

        let files = context.vault.list_files_in_dir(&request.dirpath).await?;
        BaseToolImpl::create_json_response(&files)
    }
}
