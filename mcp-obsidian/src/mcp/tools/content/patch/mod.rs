//! Targeted insert tool for MCP operations

use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::PatchContentRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for inserting content at a heading, block or frontmatter field
#[derive(Default)]
pub struct PatchContentTool;

impl PatchContentTool {
    /// Creates a new instance of the PatchContentTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for PatchContentTool {
    fn name(&self) -> &'static str {
        "obsidian_patch_content"
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
                "operation": {
                    "type": "string",
                    "description": "Operation to perform (append, prepend, or replace)",
                    "enum": ["append", "prepend", "replace"]
                },
                "target_type": {
                    "type": "string",
                    "description": "Type of target to patch",
                    "enum": ["heading", "block", "frontmatter"]
                },
                "target": {
                    "type": "string",
                    "description": "Target identifier (heading path, block reference, or frontmatter field)"
                },
                "content": {
                    "type": "string",
                    "description": "Content to insert"
                }
            },
            "required": ["filepath", "operation", "target_type", "target", "content"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: PatchContentRequest = BaseToolImpl::parse_arguments(arguments)?;
        BaseToolImpl::require_non_empty(&request.filepath, "filepath")?;
        BaseToolImpl::require_non_empty(&request.target, "target")?;

        context
            .vault
            .patch_content(
                &request.filepath,
                request.operation,
                request.target_type,
                &request.target,
                &request.content,
            )
            .await?;
        Ok(BaseToolImpl::create_success_response(format!(
            "Successfully patched content in {}",
            request.filepath
        )))
    }
}
