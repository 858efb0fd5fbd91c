//! Vault capability
//!
//! The [`VaultClient`] trait is everything the tools need from Obsidian. The
//! production implementation, [`ObsidianRestClient`], talks to the Local REST
//! API plugin; [`mock_vault::MockVault`] keeps notes in memory for tests.

pub mod mock_vault;
pub mod rest;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use rest::ObsidianRestClient;

/// Periodic note granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Daily note
    Daily,
    /// Weekly note
    Weekly,
    /// Monthly note
    Monthly,
    /// Quarterly note
    Quarterly,
    /// Yearly note
    Yearly,
}

impl Period {
    /// Every period, in schema order
    pub const ALL: [Period; 5] = [
        Period::Daily,
        Period::Weekly,
        Period::Monthly,
        Period::Quarterly,
        Period::Yearly,
    ];

    /// Path segment used by the REST API
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::Quarterly => "quarterly",
            Period::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where patched content goes relative to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOperation {
    /// After the target
    Append,
    /// Before the target
    Prepend,
    /// Instead of the target
    Replace,
}

impl PatchOperation {
    /// Value of the `Operation` header
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchOperation::Append => "append",
            PatchOperation::Prepend => "prepend",
            PatchOperation::Replace => "replace",
        }
    }
}

/// What a patch target names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    /// A heading path, e.g. `Heading 1::Subheading`
    Heading,
    /// A block reference id
    Block,
    /// A frontmatter field
    Frontmatter,
}

impl TargetType {
    /// Value of the `Target-Type` header
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Heading => "heading",
            TargetType::Block => "block",
            TargetType::Frontmatter => "frontmatter",
        }
    }
}

/// Representation requested for a periodic note
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteFormat {
    /// Raw markdown
    #[default]
    Content,
    /// JSON with path, tags, frontmatter and stat
    Metadata,
}

/// Character span of a simple-search match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSpan {
    /// Start offset
    pub start: usize,
    /// End offset
    pub end: usize,
}

/// One match inside a file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    /// Location of the match
    #[serde(rename = "match")]
    pub span: MatchSpan,
    /// Surrounding text
    pub context: String,
}

/// A file returned by simple search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Vault-relative path
    pub filename: String,
    /// Relevance score
    #[serde(default)]
    pub score: f64,
    /// Matches in this file
    #[serde(default)]
    pub matches: Vec<SearchMatch>,
}

/// Operations against an Obsidian vault
#[async_trait]
pub trait VaultClient: Send + Sync {
    /// Files and directories at the vault root
    async fn list_files_in_vault(&self) -> Result<Vec<String>>;

    /// Files and directories inside `dirpath`
    async fn list_files_in_dir(&self, dirpath: &str) -> Result<Vec<String>>;

    /// Markdown content of a single file
    async fn get_file_contents(&self, filepath: &str) -> Result<String>;

    /// Concatenated contents of several files, each under a `# {path}` header
    /// and followed by a `---` separator. A file that cannot be read is reported
    /// inline instead of failing the whole batch.
    async fn get_batch_file_contents(&self, filepaths: &[String]) -> Result<String> {
        let mut result = String::new();
        for filepath in filepaths {
            match self.get_file_contents(filepath).await {
                Ok(content) => {
                    result.push_str(&format!("# {filepath}\n\n{content}\n\n---\n\n"));
                }
                Err(e) => {
                    tracing::warn!("Batch read of {} failed: {}", filepath, e);
                    result.push_str(&format!(
                        "# {filepath}\n\nError reading file: {e}\n\n---\n\n"
                    ));
                }
            }
        }
        Ok(result)
    }

    /// Plain-text search across all files
    async fn search(&self, query: &str, context_length: u32) -> Result<Vec<SearchHit>>;

    /// JsonLogic search
    async fn search_json(&self, query: &serde_json::Value) -> Result<serde_json::Value>;

    /// Append to a file, creating it if needed
    async fn append_content(&self, filepath: &str, content: &str) -> Result<()>;

    /// Insert content relative to a heading, block or frontmatter field
    async fn patch_content(
        &self,
        filepath: &str,
        operation: PatchOperation,
        target_type: TargetType,
        target: &str,
        content: &str,
    ) -> Result<()>;

    /// Create or overwrite a file
    async fn put_content(&self, filepath: &str, content: &str) -> Result<()>;

    /// Delete a file or directory
    async fn delete_file(&self, filepath: &str) -> Result<()>;

    /// Current periodic note for `period`
    async fn get_periodic_note(&self, period: Period, format: NoteFormat) -> Result<String>;

    /// Most recent periodic notes for `period`
    async fn get_recent_periodic_notes(
        &self,
        period: Period,
        limit: u32,
        include_content: bool,
    ) -> Result<serde_json::Value>;

    /// Files modified within the last `days` days, newest first
    async fn get_recent_changes(&self, limit: u32, days: u32) -> Result<serde_json::Value>;
}
