//! Single-file read tool for MCP operations

use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::GetFileContentsRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for reading one note
#[derive(Default)]
pub struct GetFileContentsTool;

impl GetFileContentsTool {
    /// Creates a new instance of the GetFileContentsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for GetFileContentsTool {
    fn name(&self) -> &'static str {
        "obsidian_get_file_contents"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "filepath": {
                    "type": "string",
                    "description": "Path to the relevant file (relative to your vault root).",
                    "format": "path"
                }
            },
            "required": ["filepath"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: GetFileContentsRequest = BaseToolImpl::parse_arguments(arguments)?;
        BaseToolImpl::require_non_empty(&request.filepath, "filepath")?;

        let content = context.vault.get_file_contents(&request.filepath).await?;
        Ok(BaseToolImpl::create_success_response(content))
    }
}
