//! # mcp-obsidian
//!
//! A Model Context Protocol server for Obsidian vaults.
//!
//! ## Features
//!
//! - **Vault Access**: List, read, write, patch and delete notes through the
//!   Obsidian Local REST API
//! - **Search**: Simple text search, JsonLogic queries and recent-change listings
//! - **Periodic Notes**: Daily/weekly/monthly/quarterly/yearly note retrieval
//! - **Journaling**: Opt-in per-agent work logs appended to the vault
//! - **MCP Support**: Tool registry and dispatcher served over rmcp
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mcp_obsidian::mcp::{ToolContext, ToolRegistry};
//! use mcp_obsidian::vault::ObsidianRestClient;
//! use mcp_obsidian::Config;
//!
//! # async fn run() -> mcp_obsidian::Result<()> {
//! let config = Config::from_env()?;
//! let registry = ToolRegistry::build(&config.toggles)?;
//! let vault = Arc::new(ObsidianRestClient::new(&config.vault)?);
//! let context = ToolContext::new(vault);
//!
//! let result = registry
//!     .dispatch("obsidian_list_files_in_vault", serde_json::Map::new(), &context)
//!     .await?;
//! println!("{:?}", result.content);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Shared helpers
pub mod common;

/// Configuration resolved once at startup
pub mod config;

/// Error types used throughout the library
pub mod error;

/// Journal entry validation, path construction and formatting
pub mod journal;

/// Model Context Protocol (MCP) server support
pub mod mcp;

/// Vault capability and its REST implementation
pub mod vault;

pub use config::{Config, FeatureToggles, VaultSettings};
pub use error::{ErrorKind, ObsidianError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
