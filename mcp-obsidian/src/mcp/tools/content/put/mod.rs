//! Create-or-replace tool for MCP operations

use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::PutContentRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for writing a whole note
#[derive(Default)]
pub struct PutContentTool;

impl PutContentTool {
    /// Creates a new instance of the PutContentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for PutContentTool {
    fn name(&self) -> &'static str {
        "obsidian_put_content"
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
                    "description": "Path to the relevant file (relative to your vault root)",
                    "format": "path"
                },
                "content": {
                    "type": "string",
                    "description": "Content of the file you would like to upload"
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
        let request: PutContentRequest = BaseToolImpl::parse_arguments(arguments)?;
        BaseToolImpl::require_non_empty(&request.filepath, "filepath")?;

        context
            .vault
            .put_content(&request.filepath, &request.content)
            .await?;
        Ok(BaseToolImpl::create_success_response(format!(
            "Successfully uploaded content to {}",
            request.filepath
        )))
    }
}
