//! Recent periodic notes tool for MCP operations

use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::{RecentPeriodicNotesRequest, MAX_PERIODIC_LIMIT};
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for listing the latest periodic notes of a period
#[derive(Default)]
pub struct RecentPeriodicNotesTool;

impl RecentPeriodicNotesTool {
    /// Creates a new instance of the RecentPeriodicNotesTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for RecentPeriodicNotesTool {
    fn name(&self) -> &'static str {
        "obsidian_get_recent_periodic_notes"
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
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of notes to return (default: 5)",
                    "default": 5,
                    "minimum": 1,
                    "maximum": 50
                },
                "include_content": {
                    "type": "boolean",
                    "description": "Whether to include note content (default: false)",
                    "default": false
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
        let request: RecentPeriodicNotesRequest = BaseToolImpl::parse_arguments(arguments)?;
        BaseToolImpl::require_in_range(request.limit, "limit", 1, MAX_PERIODIC_LIMIT)?;

        let notes = context
            .vault
            .get_recent_periodic_notes(request.period, request.limit, request.include_content)
            .await?;
        BaseToolImpl::create_json_response(&notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::mock_vault::MockVault;
    use crate::ErrorKind;
    use rmcp::model::RawContent;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_limit_bounds() {
        let vault = MockVault::new();
        let context = ToolContext::new(Arc::new(vault.clone()));
        let tool = RecentPeriodicNotesTool::new();

        for limit in [0, 51] {
            let args = serde_json::json!({ "period": "daily", "limit": limit });
            let error = tool
                .execute(args.as_object().unwrap().clone(), &context)
                .await
                .unwrap_err();
            assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        }
        assert_eq!(vault.call_count(), 0);
    }

    #[tokio::test]
    async fn test_newest_first_with_limit() {
        let vault = MockVault::new()
            .with_file("periodic/daily/2024-01-04.md", "a")
            .with_file("periodic/daily/2024-01-05.md", "b")
            .with_file("periodic/daily/2024-01-06.md", "c");
        let context = ToolContext::new(Arc::new(vault));

        let args = serde_json::json!({ "period": "daily", "limit": 2 });
        let result = RecentPeriodicNotesTool::new()
            .execute(args.as_object().unwrap().clone(), &context)
            .await
            .unwrap();

        let RawContent::Text(text) = &result.content[0].raw else {
            panic!("Expected text content");
        };
        let parsed: serde_json::Value = serde_json::from_str(&text.text).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([
                { "path": "periodic/daily/2024-01-06.md" },
                { "path": "periodic/daily/2024-01-05.md" }
            ])
        );
    }
}
