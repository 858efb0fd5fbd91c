//! Model Context Protocol (MCP) server support
//!
//! This module exposes the vault operations as MCP tools: a closed catalog of
//! tool handlers, a registry built once from the feature toggles, and the
//! server that answers `list_tools` and `call_tool`.

pub mod error_handling;
pub mod server;
pub mod tool_registry;
pub mod tools;
pub mod types;

#[cfg(test)]
mod tests;

pub use error_handling::McpErrorHandler;
pub use server::McpServer;
pub use tool_registry::{BaseToolImpl, McpTool, ToolContext, ToolRegistry};
pub use tools::ToolHandler;
