//! Multi-file read tool for MCP operations

use crate::error::{ObsidianError, Result};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::BatchGetFileContentsRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for reading several notes in one call
#[derive(Default)]
pub struct BatchGetFileContentsTool;

impl BatchGetFileContentsTool {
    /// Creates a new instance of the BatchGetFileContentsTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for BatchGetFileContentsTool {
    fn name(&self) -> &'static str {
        "obsidian_batch_get_file_contents"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "filepaths": {
                    "type": "array",
                    "items": {
                        "type": "string",
                        "description": "Path to a file (relative to your vault root)",
                        "format": "path"
                    },
                    "description": "List of file paths to read"
                }
            },
            "required": ["filepaths"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: BatchGetFileContentsRequest = BaseToolImpl::parse_arguments(arguments)?;
        if request.filepaths.is_empty() {
            return Err(ObsidianError::invalid_argument("filepaths cannot be empty"));
        }

        let content = context
            .vault
            .get_batch_file_contents(&request.filepaths)
            .await?;
        Ok(BaseToolImpl::create_success_response(content))
    }
}
