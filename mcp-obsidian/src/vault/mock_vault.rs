//! Mock in-memory vault for testing
//!
//! `MockVault` implements [`VaultClient`] over a map of paths to contents. It
//! counts every call that reaches it and can be switched into a failing mode,
//! which lets tests prove that argument validation rejects bad input before
//! the vault is touched and that upstream failures are reported faithfully.
//!
//! # Usage
//!
//! ```ignore
//! use mcp_obsidian::vault::mock_vault::MockVault;
//! use mcp_obsidian::vault::VaultClient;
//!
//! let vault = MockVault::new().with_file("Inbox/todo.md", "- [ ] write tests");
//! let content = vault.get_file_contents("Inbox/todo.md").await?;
//! assert_eq!(vault.call_count(), 1);
//! ```

use super::{
    MatchSpan, NoteFormat, PatchOperation, Period, SearchHit, SearchMatch, TargetType,
    VaultClient,
};
use crate::error::{ObsidianError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory [`VaultClient`]
#[derive(Debug, Clone, Default)]
pub struct MockVault {
    files: Arc<RwLock<BTreeMap<String, String>>>,
    calls: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

fn not_found(path: &str) -> ObsidianError {
    ObsidianError::Api {
        code: 40400,
        message: format!("File not found: {path}"),
    }
}

impl MockVault {
    /// Empty vault
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file. Only takes effect before the vault has been cloned.
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        match Arc::get_mut(&mut self.files) {
            Some(files) => {
                files
                    .get_mut()
                    .insert(path.to_string(), content.to_string());
            }
            None => tracing::warn!("MockVault already shared, not seeding {}", path),
        }
        self
    }

    /// Number of calls that reached the vault
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail with a server error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Current content of a file
    pub async fn file(&self, path: &str) -> Option<String> {
        self.files.read().await.get(path).cloned()
    }

    fn record(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ObsidianError::Api {
                code: 50000,
                message: "mock vault failure".to_string(),
            });
        }
        Ok(())
    }

    /// Immediate children of `prefix`; directories carry a trailing `/`
    async fn children(&self, prefix: &str) -> Vec<String> {
        let files = self.files.read().await;
        let mut entries: Vec<String> = files
            .keys()
            .filter_map(|path| path.strip_prefix(prefix))
            .map(|rest| match rest.split_once('/') {
                Some((dir, _)) => format!("{dir}/"),
                None => rest.to_string(),
            })
            .collect();
        entries.dedup();
        entries
    }
}

#[async_trait]
impl VaultClient for MockVault {
    async fn list_files_in_vault(&self) -> Result<Vec<String>> {
        self.record()?;
        Ok(self.children("").await)
    }

    async fn list_files_in_dir(&self, dirpath: &str) -> Result<Vec<String>> {
        self.record()?;
        let prefix = format!("{}/", dirpath.trim_end_matches('/'));
        let entries = self.children(&prefix).await;
        if entries.is_empty() {
            return Err(not_found(dirpath));
        }
        Ok(entries)
    }

    async fn get_file_contents(&self, filepath: &str) -> Result<String> {
        self.record()?;
        self.file(filepath).await.ok_or_else(|| not_found(filepath))
    }

    async fn search(&self, query: &str, context_length: u32) -> Result<Vec<SearchHit>> {
        self.record()?;
        let files = self.files.read().await;
        let context_length = context_length as usize;
        Ok(files
            .iter()
            .filter_map(|(path, content)| {
                let start = content.find(query)?;
                let end = start + query.len();
                let context_start = content[..start]
                    .char_indices()
                    .rev()
                    .nth(context_length.saturating_sub(1))
                    .map_or(0, |(i, _)| i);
                let context_end = content[end..]
                    .char_indices()
                    .nth(context_length)
                    .map_or(content.len(), |(i, _)| end + i);
                Some(SearchHit {
                    filename: path.clone(),
                    score: 1.0,
                    matches: vec![SearchMatch {
                        span: MatchSpan { start, end },
                        context: content[context_start..context_end].to_string(),
                    }],
                })
            })
            .collect())
    }

    async fn search_json(&self, query: &serde_json::Value) -> Result<serde_json::Value> {
        self.record()?;
        let files = self.files.read().await;
        Ok(serde_json::Value::Array(
            files
                .keys()
                .map(|path| serde_json::json!({ "filename": path, "result": query }))
                .collect(),
        ))
    }

    async fn append_content(&self, filepath: &str, content: &str) -> Result<()> {
        self.record()?;
        self.files
            .write()
            .await
            .entry(filepath.to_string())
            .or_default()
            .push_str(content);
        Ok(())
    }

    async fn patch_content(
        &self,
        filepath: &str,
        operation: PatchOperation,
        _target_type: TargetType,
        target: &str,
        content: &str,
    ) -> Result<()> {
        self.record()?;
        let mut files = self.files.write().await;
        let existing = files.get_mut(filepath).ok_or_else(|| not_found(filepath))?;
        let Some(at) = existing.find(target) else {
            return Err(ObsidianError::Api {
                code: 40080,
                message: format!("Patch target not found: {target}"),
            });
        };
        match operation {
            PatchOperation::Append => existing.insert_str(at + target.len(), content),
            PatchOperation::Prepend => existing.insert_str(at, content),
            PatchOperation::Replace => existing.replace_range(at..at + target.len(), content),
        }
        Ok(())
    }

    async fn put_content(&self, filepath: &str, content: &str) -> Result<()> {
        self.record()?;
        self.files
            .write()
            .await
            .insert(filepath.to_string(), content.to_string());
        Ok(())
    }

    async fn delete_file(&self, filepath: &str) -> Result<()> {
        self.record()?;
        self.files
            .write()
            .await
            .remove(filepath)
            .map(|_| ())
            .ok_or_else(|| not_found(filepath))
    }

    async fn get_periodic_note(&self, period: Period, format: NoteFormat) -> Result<String> {
        self.record()?;
        let path = format!("periodic/{period}.md");
        let content = self.file(&path).await.ok_or_else(|| not_found(&path))?;
        Ok(match format {
            NoteFormat::Content => content,
            NoteFormat::Metadata => {
                serde_json::json!({ "path": path, "content": content }).to_string()
            }
        })
    }

    async fn get_recent_periodic_notes(
        &self,
        period: Period,
        limit: u32,
        include_content: bool,
    ) -> Result<serde_json::Value> {
        self.record()?;
        let files = self.files.read().await;
        let prefix = format!("periodic/{period}/");
        Ok(serde_json::Value::Array(
            files
                .iter()
                .filter(|(path, _)| path.starts_with(&prefix))
                .rev()
                .take(limit as usize)
                .map(|(path, content)| {
                    if include_content {
                        serde_json::json!({ "path": path, "content": content })
                    } else {
                        serde_json::json!({ "path": path })
                    }
                })
                .collect(),
        ))
    }

    async fn get_recent_changes(&self, limit: u32, _days: u32) -> Result<serde_json::Value> {
        self.record()?;
        let files = self.files.read().await;
        Ok(serde_json::Value::Array(
            files
                .keys()
                .take(limit as usize)
                .map(|path| serde_json::json!({ "filename": path }))
                .collect(),
        ))
    }
}
