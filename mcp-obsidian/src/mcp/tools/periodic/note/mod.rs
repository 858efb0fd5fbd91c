//! Current periodic note tool for MCP operations

use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::PeriodicNoteRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for reading the current daily/weekly/... note
#[derive(Default)]
pub struct PeriodicNoteTool;

impl PeriodicNoteTool {
    /// Creates a new instance of the PeriodicNoteTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for PeriodicNoteTool {
    fn name(&self) -> &'static str {
        "obsidian_get_periodic_note"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "period": {
                    "type": "string",
                    "description": "The period type (daily, weekly, monthly, quarterly, yearly)",
                    "enum": ["daily", "weekly", "monthly", "quarterly", "yearly"]
                },
                "type": {
                    "type": "string",
                    "description": "The type of data to get ('content' or 'metadata'). 'content' returns just the content in Markdown format. 'metadata' includes note metadata (including paths, tags, etc.) and the content.",
                    "default": "content",
                    "enum": ["content", "metadata"]
                }
            },
            "required": ["period"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: PeriodicNoteRequest = BaseToolImpl::parse_arguments(arguments)?;

        let note = context
            .vault
            .get_periodic_note(request.period, request.format)
            .await?;
        Ok(BaseToolImpl::create_success_response(note))
    }
}
