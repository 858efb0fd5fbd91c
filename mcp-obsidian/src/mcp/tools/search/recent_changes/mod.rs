//! Recently modified files tool for MCP operations

use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{RecentChangesRequest, MAX_CHANGES_LIMIT};
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for listing recently modified files
#[derive(Default)]
pub struct RecentChangesTool;

impl RecentChangesTool {
    /// Creates a new instance of the RecentChangesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for RecentChangesTool {
    fn name(&self) -> &'static str {
        "obsidian_get_recent_changes"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of files to return (default: 10)",
                    "default": 10,
                    "minimum": 1,
                    "maximum": 100
                },
                "days": {
                    "type": "integer",
                    "description": "Only include files modified within this many days (default: 90)",
                    "minimum": 1,
                    "default": 90
                }
            }
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: RecentChangesRequest = BaseToolImpl::parse_arguments(arguments)?;
        BaseToolImpl::require_in_range(request.limit, "limit", 1, MAX_CHANGES_LIMIT)?;
        BaseToolImpl::require_in_range(request.days, "days", 1, u32::MAX)?;

        let changes = context
            .vault
            .get_recent_changes(request.limit, request.days)
            .await?;
        BaseToolImpl::create_json_response(&changes)
    }
}
