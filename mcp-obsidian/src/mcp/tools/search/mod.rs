//! Search tools
//!
//! - **simple**: plain-text search with match context (can be disabled for
//!   large vaults via `OBSIDIAN_DISABLE_SIMPLE_SEARCH=true`)
//! - **complex**: JsonLogic queries over note metadata
//! - **recent_changes**: Dataview DQL listing of recently modified files

pub mod complex;
pub mod recent_changes;
pub mod simple;
