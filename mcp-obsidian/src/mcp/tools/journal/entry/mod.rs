//! Journal entry tool for MCP operations
//!
//! Appends a timestamped reflective entry to
//! `{project_dir}/work-logs/{YYYY-MM-DD}/{agent}.log`. Repeated calls on the
//! same day by the same agent land in the same file.

use crate::error::Result;
use crate::journal::{format_entry, journal_path, validate_entry};
use crate::mcp::tool_registry::{BaseToolImpl, McpTool, ToolContext};
use crate::mcp::types::JournalEntryRequest;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Tool for appending to an agent's daily work log
#[derive(Default)]
pub struct JournalEntryTool;

impl JournalEntryTool {
    /// Creates a new instance of the JournalEntryTool
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl McpTool for JournalEntryTool {
    fn name(&self) -> &'static str {
        "obsidian_journal_entry"
    }

    fn description(&self) -> &'static str {
        include_str!("description.md")
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "content": {
                    "type": "string",
                    "description": "The journal entry text"
                },
                "type": {
                    "type": "string",
                    "description": "Kind of entry, e.g. decision, learning, feeling, reflection"
                },
                "agent": {
                    "type": "string",
                    "description": "Name of the agent writing the entry; used as the log file name"
                },
                "alternatives": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Alternatives that were considered"
                },
                "confidence": {
                    "type": "string",
                    "enum": ["high", "medium", "low"],
                    "description": "Confidence in the decision"
                },
                "project_dir": {
                    "type": "string",
                    "description": "Vault folder the work-logs directory lives under (default: vault root)"
                }
            },
            "required": ["content", "type", "agent"]
        })
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        let request: JournalEntryRequest = BaseToolImpl::parse_arguments(arguments)?;
        validate_entry(
            &request.content,
            &request.entry_type,
            &request.agent,
            request.confidence.as_deref(),
        )?;

        let clock = context.clock.as_ref();
        let path = journal_path(clock, request.project_dir.as_deref(), &request.agent);
        let entry = format_entry(
            clock,
            &request.content,
            &request.entry_type,
            request.alternatives.as_deref(),
            request.confidence.as_deref(),
        );

        tracing::debug!("Appending {} journal entry to {}", request.entry_type, path);
        context.vault.append_content(&path, &entry).await?;
        Ok(BaseToolImpl::create_success_response(format!(
            "Journal entry appended to {path}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::FixedClock;
    use crate::vault::mock_vault::MockVault;
    use crate::ErrorKind;
    use chrono::NaiveDate;
    use rmcp::model::RawContent;
    use std::sync::Arc;

    fn context(vault: &MockVault) -> ToolContext {
        let now = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        ToolContext::new(Arc::new(vault.clone())).with_clock(Arc::new(FixedClock(now)))
    }

    fn args(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().unwrap().clone()
    }

    #[tokio::test]
    async fn test_full_entry_written() {
        let vault = MockVault::new();
        let result = JournalEntryTool::new()
            .execute(
                args(serde_json::json!({
                    "content": "Chose BTreeMap for stable ordering",
                    "type": "decision",
                    "agent": "planner",
                    "alternatives": ["HashMap", "Vec"],
                    "confidence": "high",
                    "project_dir": "/Projects/alpha/"
                })),
                &context(&vault),
            )
            .await
            .unwrap();

        let RawContent::Text(text) = &result.content[0].raw else {
            panic!("Expected text content");
        };
        assert_eq!(
            text.text,
            "Journal entry appended to Projects/alpha/work-logs/2024-01-05/planner.log"
        );
        assert_eq!(
            vault
                .file("Projects/alpha/work-logs/2024-01-05/planner.log")
                .await
                .unwrap(),
            "[2024-01-05 09:15] decision: Chose BTreeMap for stable ordering\n\n\
             Alternatives considered: HashMap, Vec\n\n\
             Confidence: high\n\n\
             ---\n\n"
        );
    }

    #[tokio::test]
    async fn test_invalid_entry_never_reaches_vault() {
        let vault = MockVault::new();
        let tool = JournalEntryTool::new();

        for bad in [
            serde_json::json!({ "content": "  ", "type": "decision", "agent": "a" }),
            serde_json::json!({ "content": "c", "type": "", "agent": "a" }),
            serde_json::json!({ "content": "c", "type": "t", "agent": "../etc/x" }),
            serde_json::json!({ "content": "c", "type": "t", "agent": "a", "confidence": "sure" }),
            serde_json::json!({ "content": "c", "type": "t" }),
        ] {
            let error = tool.execute(args(bad), &context(&vault)).await.unwrap_err();
            assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        }
        assert_eq!(vault.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_confidence_is_treated_as_absent() {
        let vault = MockVault::new();
        JournalEntryTool::new()
            .execute(
                args(serde_json::json!({
                    "content": "Kept the old parser",
                    "type": "decision",
                    "agent": "main",
                    "confidence": ""
                })),
                &context(&vault),
            )
            .await
            .unwrap();

        assert_eq!(
            vault.file("work-logs/2024-01-05/main.log").await.unwrap(),
            "[2024-01-05 09:15] decision: Kept the old parser\n\n---\n\n"
        );
    }

    #[tokio::test]
    async fn test_same_day_entries_share_a_log() {
        let vault = MockVault::new();
        let tool = JournalEntryTool::new();

        for content in ["first", "second"] {
            tool.execute(
                args(serde_json::json!({ "content": content, "type": "learning", "agent": "main" })),
                &context(&vault),
            )
            .await
            .unwrap();
        }

        let log = vault.file("work-logs/2024-01-05/main.log").await.unwrap();
        assert_eq!(log.matches("---\n").count(), 2);
        assert!(log.find("first").unwrap() < log.find("second").unwrap());
    }
}
