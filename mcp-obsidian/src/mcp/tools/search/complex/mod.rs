//! JsonLogic search tool for MCP operations

use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::ComplexSearchRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for structured JsonLogic queries
#[derive(Default)]
pub struct ComplexSearchTool;

impl ComplexSearchTool {
    /// Creates a new instance of the ComplexSearchTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for ComplexSearchTool {
    fn name(&self) -> &'static str {
        "obsidian_complex_search"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "object",
                    "description": "JsonLogic query object. Example: {\"glob\": [\"*.md\", {\"var\": \"path\"}]} matches all markdown files"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: ComplexSearchRequest = BaseToolImpl::parse_arguments(arguments)?;

        let query = serde_json::Value::Object(request.query);
        let results = context.vault.search_json(&query).await?;
        BaseToolImpl::create_json_response(&results)
    }
}
