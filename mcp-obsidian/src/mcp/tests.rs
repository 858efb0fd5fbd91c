//! Tests for MCP server functionality

use super::server::McpServer;
use super::tool_registry::{McpTool, ToolContext, ToolRegistry};
use super::tools::catalog;
use crate::config::FeatureToggles;
use crate::journal::FixedClock;
use crate::vault::mock_vault::MockVault;
use crate::ErrorKind;
use chrono::NaiveDate;
use rmcp::model::{ErrorCode, RawContent};
use rmcp::ServerHandler;
use std::sync::Arc;

fn context(vault: &MockVault) -> ToolContext {
    let now = NaiveDate::from_ymd_opt(2024, 1, 5)
        .unwrap()
        .and_hms_opt(18, 45, 0)
        .unwrap();
    ToolContext::new(Arc::new(vault.clone())).with_clock(Arc::new(FixedClock(now)))
}

fn all_tools() -> FeatureToggles {
    FeatureToggles {
        simple_search_enabled: true,
        journaling_enabled: true,
    }
}

fn server(vault: &MockVault, toggles: FeatureToggles) -> McpServer {
    McpServer::with_context(ToolRegistry::build(&toggles).unwrap(), context(vault))
}

fn text_of(result: &rmcp::model::CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[tokio::test]
async fn test_toggles_swap_search_for_journal() {
    let vault = MockVault::new();
    let toggles = FeatureToggles {
        simple_search_enabled: false,
        journaling_enabled: true,
    };
    let registry = ToolRegistry::build(&toggles).unwrap();

    let names = registry.list_tool_names();
    assert!(names.contains(&"obsidian_journal_entry"));
    assert!(!names.contains(&"obsidian_simple_search"));
    assert_eq!(names.last(), Some(&"obsidian_journal_entry"));

    let error = registry
        .dispatch("obsidian_simple_search", serde_json::Map::new(), &context(&vault))
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UnknownTool);
    assert_eq!(vault.call_count(), 0);
}

#[test]
fn test_tool_names_unique() {
    let registry = ToolRegistry::build(&all_tools()).unwrap();
    assert_eq!(registry.len(), catalog().len());

    let mut names = registry.list_tool_names();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), registry.len());
}

#[tokio::test]
async fn test_missing_required_argument_never_reaches_vault() {
    let vault = MockVault::new().with_file("a.md", "alpha");
    let registry = ToolRegistry::build(&all_tools()).unwrap();
    let context = context(&vault);

    let mut checked = 0;
    for (_, make) in catalog() {
        let tool = make();
        let schema = tool.schema();
        let required = schema["required"].as_array().cloned().unwrap_or_default();
        if required.is_empty() {
            continue;
        }

        let error = registry
            .dispatch(tool.name(), serde_json::Map::new(), &context)
            .await
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument, "{}", tool.name());
        checked += 1;
    }

    assert!(checked >= 12);
    assert_eq!(vault.call_count(), 0);
}

#[tokio::test]
async fn test_upstream_failure_is_reported() {
    let vault = MockVault::new().with_file("a.md", "alpha");
    let server = server(&vault, FeatureToggles::default());
    vault.set_failing(true);

    let mut arguments = serde_json::Map::new();
    arguments.insert("filepath".into(), "a.md".into());
    let error = server
        .call("obsidian_get_file_contents", Some(arguments))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::INTERNAL_ERROR);
    assert_eq!(error.message, "Error 50000: mock vault failure");
    assert_eq!(
        error.data,
        Some(serde_json::json!({
            "kind": "upstream_failure",
            "tool": "obsidian_get_file_contents"
        }))
    );
    assert_eq!(vault.call_count(), 1);
}

#[tokio::test]
async fn test_missing_file_is_upstream_failure() {
    let vault = MockVault::new();
    let server = server(&vault, FeatureToggles::default());

    let mut arguments = serde_json::Map::new();
    arguments.insert("filepath".into(), "nope.md".into());
    let error = server
        .call("obsidian_get_file_contents", Some(arguments))
        .await
        .unwrap_err();

    assert_eq!(error.data.unwrap()["kind"], "upstream_failure");
    assert!(error.message.contains("nope.md"));
}

#[tokio::test]
async fn test_unknown_tool_envelope() {
    let vault = MockVault::new();
    let server = server(&vault, FeatureToggles::default());

    let error = server.call("obsidian_journal_entry", None).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::INVALID_REQUEST);
    assert_eq!(error.data.unwrap()["kind"], "unknown_tool");
}

#[tokio::test]
async fn test_missing_arguments_treated_as_empty() {
    let vault = MockVault::new().with_file("README.md", "hi");
    let server = server(&vault, FeatureToggles::default());

    let result = server.call("obsidian_list_files_in_vault", None).await.unwrap();
    assert_eq!(text_of(&result), "[\n  \"README.md\"\n]");

    let error = server
        .call("obsidian_get_file_contents", None)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
}

#[tokio::test]
async fn test_journal_appends_twice_to_same_path() {
    let vault = MockVault::new();
    let server = server(&vault, all_tools());

    let mut paths = Vec::new();
    for (content, entry_type) in [("Chose X over Y", "decision"), ("Tests pass", "feeling")] {
        let arguments = serde_json::json!({
            "content": content,
            "type": entry_type,
            "agent": "architect",
            "project_dir": "/vault/"
        });
        let result = server
            .call(
                "obsidian_journal_entry",
                arguments.as_object().cloned(),
            )
            .await
            .unwrap();
        paths.push(text_of(&result).to_string());
    }

    assert_eq!(paths[0], paths[1]);
    assert_eq!(
        vault
            .file("vault/work-logs/2024-01-05/architect.log")
            .await
            .unwrap(),
        "[2024-01-05 18:45] decision: Chose X over Y\n\n---\n\n\
         [2024-01-05 18:45] feeling: Tests pass\n\n---\n\n"
    );
}

#[tokio::test]
async fn test_mutation_tools_round_trip() {
    let vault = MockVault::new();
    let server = server(&vault, FeatureToggles::default());

    let put = serde_json::json!({ "filepath": "Inbox/todo.md", "content": "# Todo\n" });
    let result = server
        .call("obsidian_put_content", put.as_object().cloned())
        .await
        .unwrap();
    assert_eq!(text_of(&result), "Successfully uploaded content to Inbox/todo.md");

    let append = serde_json::json!({ "filepath": "Inbox/todo.md", "content": "- [ ] one\n" });
    let result = server
        .call("obsidian_append_content", append.as_object().cloned())
        .await
        .unwrap();
    assert_eq!(text_of(&result), "Successfully appended content to Inbox/todo.md");

    let get = serde_json::json!({ "filepath": "Inbox/todo.md" });
    let result = server
        .call("obsidian_get_file_contents", get.as_object().cloned())
        .await
        .unwrap();
    assert_eq!(text_of(&result), "# Todo\n- [ ] one\n");

    let delete = serde_json::json!({ "filepath": "Inbox/todo.md", "confirm": true });
    server
        .call("obsidian_delete_file", delete.as_object().cloned())
        .await
        .unwrap();
    assert!(vault.file("Inbox/todo.md").await.is_none());
}

#[tokio::test]
async fn test_server_info() {
    let vault = MockVault::new();
    let server = server(&vault, FeatureToggles::default());

    let info = server.get_info();
    assert_eq!(info.server_info.name, "mcp-obsidian");
    assert_eq!(info.server_info.version, crate::VERSION);
    assert!(info.capabilities.tools.is_some());
    assert!(info.capabilities.prompts.is_none());
    assert_eq!(server.list_tool_descriptors().len(), 13);
}
