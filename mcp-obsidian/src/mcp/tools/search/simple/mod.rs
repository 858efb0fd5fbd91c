//! Simple text search tool for MCP operations

use crate::error::Result;
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::SimpleSearchRequest;
use crate::vault::{MatchSpan, SearchHit};
use async_trait::async_trait;
use rmcp::model::CallToolResult;
use serde::Serialize;

/// Tool for plain-text search across the vault
#[derive(Default)]
pub struct SimpleSearchTool;

impl SimpleSearchTool {
    /// Creates a new instance of the SimpleSearchTool
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Serialize)]
struct FormattedMatch {
    context: String,
    match_position: MatchSpan,
}

#[derive(Debug, Serialize)]
struct FormattedHit {
    filename: String,
    score: f64,
    matches: Vec<FormattedMatch>,
}

impl From<SearchHit> for FormattedHit {
    fn from(hit: SearchHit) -> Self {
        Self {
            filename: hit.filename,
            score: hit.score,
            matches: hit
                .matches
                .into_iter()
                .map(|m| FormattedMatch {
                    context: m.context,
                    match_position: m.span,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl McpTool for SimpleSearchTool {
    fn name(&self) -> &'static str {
        "obsidian_simple_search"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Text to search for in the vault."
                },
                "context_length": {
                    "type": "integer",
                    "description": "How much context to return around the matching string (default: 100)",
                    "default": 100
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
        let request: SimpleSearchRequest = BaseToolImpl::parse_arguments(arguments)?;
        BaseToolImpl::require_non_empty(&request.query, "query")?;

        tracing::debug!(
            "Simple search for '{}' with context length {}",
            request.query,
            request.context_length
        );
        let hits = context
            .vault
            .search(&request.query, request.context_length)
            .await?;
        let formatted: Vec<FormattedHit> = hits.into_iter().map(FormattedHit::from).collect();
        BaseToolImpl::create_json_response(&formatted)
    }
}
