//! Append tool for MCP operations

use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::AppendContentRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for appending to a note
#[derive(Default)]
pub struct AppendContentTool;

impl AppendContentTool {
    /// Creates a new instance of the AppendContentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for AppendContentTool {
    fn name(&self) -> &'static str {
        "obsidian_append_content"
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
                    "description": "Path to the file (relative to vault root)",
                    "format": "path"
                },
                "content": {
                    "type": "string",
                    "description": "Content to append to the file"
                }
            },
            "required": ["filepath", "content"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: AppendContentRequest = BaseToolImpl::parse_arguments(arguments)?;
        BaseToolImpl::require_non_empty(&request.filepath, "filepath")?;

        context
            .vault
            .append_content(&request.filepath, &request.content)
            .await?;
        Ok(BaseToolImpl::create_success_response(format!(
            "Successfully appended content to {}",
            request.filepath
        )))
    }
}
