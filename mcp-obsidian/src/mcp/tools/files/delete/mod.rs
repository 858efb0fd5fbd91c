//! File deletion tool for MCP operations

use crate::error::{ObsidianError, Result};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::DeleteFileRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for deleting a note or directory
#[derive(Default)]
pub struct DeleteFileTool;

impl DeleteFileTool {
    /// Creates a new instance of the DeleteFileTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for DeleteFileTool {
    fn name(&self) -> &'static str {
        "obsidian_delete_file"
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
                    "description": "Path to the file or directory to delete (relative to vault root)",
                    "format": "path"
                },
                "confirm": {
                    "type": "boolean",
                    "description": "Confirmation to delete the file (must be true)",
                    "default": false
                }
            },
            "required": ["filepath", "confirm"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: DeleteFileRequest = BaseToolImpl::parse_arguments(arguments)?;
        BaseToolImpl::require_non_empty(&request.filepath, "filepath")?;
        if !request.confirm {
            return Err(ObsidianError::invalid_argument(
                "confirm must be set to true to delete a file",
            ));
        }

        context.vault.delete_file(&request.filepath).await?;
        tracing::info!("Deleted {}", request.filepath);
        Ok(BaseToolImpl::create_success_response(format!(
            "Successfully deleted {}",
            request.filepath
        )))
    }
}
