//! Tool implementations
//!
//! Each tool lives in its own submodule with a dedicated implementation and a
//! `description.md`. The set of tools is closed: [`ToolHandler`] has one
//! variant per tool and [`catalog`] lists them in registration order, each
//! paired with the toggle predicate that decides whether it is registered.

pub mod content;
pub mod files;
pub mod journal;
pub mod periodic;
pub mod search;

use super::tool_registry::{McpTool, ToolContext};
use crate::config::FeatureToggles;
use crate::error::Result;
use async_trait::async_trait;
use rmcp::model::CallToolResult;

/// Every tool the server can expose
pub enum ToolHandler {
    /// `obsidian_list_files_in_dir`
    ListFilesInDir(files::list_dir::ListFilesInDirTool),
    /// `obsidian_list_files_in_vault`
    ListFilesInVault(files::list_vault::ListFilesInVaultTool),
    /// `obsidian_get_file_contents`
    GetFileContents(files::get_contents::GetFileContentsTool),
    /// `obsidian_simple_search`
    Search(search::simple::SimpleSearchTool),
    /// `obsidian_patch_content`
    PatchContent(content::patch::PatchContentTool),
    /// `obsidian_append_content`
    AppendContent(content::append::AppendContentTool),
    /// `obsidian_put_content`
    PutContent(content::put::PutContentTool),
    /// `obsidian_delete_file`
    DeleteFile(files::delete::DeleteFileTool),
    /// `obsidian_complex_search`
    ComplexSearch(search::complex::ComplexSearchTool),
    /// `obsidian_batch_get_file_contents`
    BatchGetFileContents(files::batch_get::BatchGetFileContentsTool),
    /// `obsidian_get_periodic_note`
    PeriodicNotes(periodic::note::PeriodicNoteTool),
    /// `obsidian_get_recent_periodic_notes`
    RecentPeriodicNotes(periodic::recent::RecentPeriodicNotesTool),
    /// `obsidian_get_recent_changes`
    RecentChanges(search::recent_changes::RecentChangesTool),
    /// `obsidian_journal_entry`
    JournalEntry(journal::entry::JournalEntryTool),
}

macro_rules! each_tool {
    ($handler:expr, $tool:ident => $body:expr) => {
        match $handler {
            ToolHandler::ListFilesInDir($tool) => $body,
            ToolHandler::ListFilesInVault($tool) => $body,
            ToolHandler::GetFileContents($tool) => $body,
            ToolHandler::Search($tool) => $body,
            ToolHandler::PatchContent($tool) => $body,
            ToolHandler::AppendContent($tool) => $body,
            ToolHandler::PutContent($tool) => $body,
            ToolHandler::DeleteFile($tool) => $body,
            ToolHandler::ComplexSearch($tool) => $body,
            ToolHandler::BatchGetFileContents($tool) => $body,
            ToolHandler::PeriodicNotes($tool) => $body,
            ToolHandler::RecentPeriodicNotes($tool) => $body,
            ToolHandler::RecentChanges($tool) => $body,
            ToolHandler::JournalEntry($tool) => $body,
        }
    };
}

#[async_trait]
impl McpTool for ToolHandler {
    fn name(&self) -> &'static str {
        each_tool!(self, tool => tool.name())
    }

    fn description(&self) -> &'static str {
        each_tool!(self, tool => tool.description())
    }

    fn schema(&self) -> serde_json::Value {
        each_tool!(self, tool => tool.schema())
    }

    async fn execute(
        &self,
        arguments: serde_json::Map<String, serde_json::Value>,
        context: &ToolContext,
    ) -> Result<CallToolResult> {
        each_tool!(self, tool => tool.execute(arguments, context).await)
    }
}

/// Decides from the toggles whether a catalog entry is registered
pub type ToolPredicate = fn(&FeatureToggles) -> bool;

/// Constructs a catalog entry's handler
pub type ToolFactory = fn() -> ToolHandler;

fn always(_: &FeatureToggles) -> bool {
    true
}

fn simple_search_enabled(toggles: &FeatureToggles) -> bool {
    toggles.simple_search_enabled
}

fn journaling_enabled(toggles: &FeatureToggles) -> bool {
    toggles.journaling_enabled
}

/// All tools in registration order
pub fn catalog() -> [(ToolPredicate, ToolFactory); 14] {
    [
        (always, || ToolHandler::ListFilesInDir(Default::default())),
        (always, || ToolHandler::ListFilesInVault(Default::default())),
        (always, || ToolHandler::GetFileContents(Default::default())),
        (simple_search_enabled, || ToolHandler::Search(Default::default())),
        (always, || ToolHandler::PatchContent(Default::default())),
        (always, || ToolHandler::AppendContent(Default::default())),
        (always, || ToolHandler::PutContent(Default::default())),
        (always, || ToolHandler::DeleteFile(Default::default())),
        (always, || ToolHandler::ComplexSearch(Default::default())),
        (always, || ToolHandler::BatchGetFileContents(Default::default())),
        (always, || ToolHandler::PeriodicNotes(Default::default())),
        (always, || ToolHandler::RecentPeriodicNotes(Default::default())),
        (always, || ToolHandler::RecentChanges(Default::default())),
        (journaling_enabled, || ToolHandler::JournalEntry(Default::default())),
    ]
}
