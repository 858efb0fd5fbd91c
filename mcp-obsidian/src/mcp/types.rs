//! Request types for the MCP tools
//!
//! Fields without a serde default are the schema's `required` arguments:
//! leaving one out fails argument parsing before the vault is called.

use crate::vault::{NoteFormat, PatchOperation, Period, TargetType};
use serde::Deserialize;

/// Default context characters around a simple-search match
pub const DEFAULT_CONTEXT_LENGTH: u32 = 100;
/// Default number of recent periodic notes
pub const DEFAULT_PERIODIC_LIMIT: u32 = 5;
/// Upper bound for recent periodic notes
pub const MAX_PERIODIC_LIMIT: u32 = 50;
/// Default number of recently changed files
pub const DEFAULT_CHANGES_LIMIT: u32 = 10;
/// Upper bound for recently changed files
pub const MAX_CHANGES_LIMIT: u32 = 100;
/// Default look-back window for recent changes
pub const DEFAULT_CHANGES_DAYS: u32 = 90;

fn default_context_length() -> u32 {
    DEFAULT_CONTEXT_LENGTH
}

fn default_periodic_limit() -> u32 {
    DEFAULT_PERIODIC_LIMIT
}

fn default_changes_limit() -> u32 {
    DEFAULT_CHANGES_LIMIT
}

fn default_changes_days() -> u32 {
    DEFAULT_CHANGES_DAYS
}

/// Request to list the vault root
#[derive(Debug, Deserialize)]
pub struct ListFilesInVaultRequest {}

/// Request to list a directory
#[derive(Debug, Deserialize)]
pub struct ListFilesInDirRequest {
    /// Directory relative to the vault root
    pub dirpath: String,
}

/// Request to read one file
#[derive(Debug, Deserialize)]
pub struct GetFileContentsRequest {
    /// File relative to the vault root
    pub filepath: String,
}

/// Request to read several files
#[derive(Debug, Deserialize)]
pub struct BatchGetFileContentsRequest {
    /// Files relative to the vault root
    pub filepaths: Vec<String>,
}

/// Simple text search
#[derive(Debug, Deserialize)]
pub struct SimpleSearchRequest {
    /// Text to search for
    pub query: String,
    /// Characters of context around each match
    #[serde(default = "default_context_length")]
    pub context_length: u32,
}

/// JsonLogic search
#[derive(Debug, Deserialize)]
pub struct ComplexSearchRequest {
    /// JsonLogic expression
    pub query: serde_json::Map<String, serde_json::Value>,
}

/// Insert content relative to a target in a note
#[derive(Debug, Deserialize)]
pub struct PatchContentRequest {
    /// File relative to the vault root
    pub filepath: String,
    /// append, prepend or replace
    pub operation: PatchOperation,
    /// heading, block or frontmatter
    pub target_type: TargetType,
    /// Heading path, block id or frontmatter field
    pub target: String,
    /// Content to insert
    pub content: String,
}

/// Append to a file
#[derive(Debug, Deserialize)]
pub struct AppendContentRequest {
    /// File relative to the vault root
    pub filepath: String,
    /// Content to append
    pub content: String,
}

/// Create or replace a file
#[derive(Debug, Deserialize)]
pub struct PutContentRequest {
    /// File relative to the vault root
    pub filepath: String,
    /// New file content
    pub content: String,
}

/// Delete a file
#[derive(Debug, Deserialize)]
pub struct DeleteFileRequest {
    /// File or directory relative to the vault root
    pub filepath: String,
    /// Must be true
    pub confirm: bool,
}

/// Current periodic note
#[derive(Debug, Deserialize)]
pub struct PeriodicNoteRequest {
    /// Note period
    pub period: Period,
    /// content or metadata
    #[serde(default, rename = "type")]
    pub format: NoteFormat,
}

/// Most recent periodic notes
#[derive(Debug, Deserialize)]
pub struct RecentPeriodicNotesRequest {
    /// Note period
    pub period: Period,
    /// How many notes to return
    #[serde(default = "default_periodic_limit")]
    pub limit: u32,
    /// Include note bodies
    #[serde(default)]
    pub include_content: bool,
}

/// Recently modified files
#[derive(Debug, Deserialize)]
pub struct RecentChangesRequest {
    /// How many files to return
    #[serde(default = "default_changes_limit")]
    pub limit: u32,
    /// Look-back window in days
    #[serde(default = "default_changes_days")]
    pub days: u32,
}

/// Journal entry to append to the agent's daily log
#[derive(Debug, Deserialize)]
pub struct JournalEntryRequest {
    /// Reflective entry text
    pub content: String,
    /// Kind of entry, e.g. decision, learning, feeling
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Agent writing the entry; names the log file
    pub agent: String,
    /// Options weighed before deciding
    #[serde(default)]
    pub alternatives: Option<Vec<String>>,
    /// high, medium or low
    #[serde(default)]
    pub confidence: Option<String>,
    /// Vault folder the work-logs live under
    #[serde(default)]
    pub project_dir: Option<String>,
}
