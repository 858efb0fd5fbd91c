//! Conversion of tool failures into MCP protocol errors

use crate::error::{ErrorKind, ObsidianError};
use rmcp::Error as McpError;

/// Centralized mapping from [`ObsidianError`] to MCP errors
pub struct McpErrorHandler;

impl McpErrorHandler {
    /// Convert an ObsidianError raised by `tool` into an MCP error response.
    ///
    /// - Bad arguments -> invalid_params
    /// - Unknown tool -> invalid_request
    /// - Vault, transport and configuration failures -> internal_error
    ///
    /// The error kind and tool name travel in the error's `data` so clients
    /// can tell the categories apart without parsing messages.
    pub fn handle_error(error: ObsidianError, tool: &str) -> McpError {
        let kind = error.kind();
        match kind {
            ErrorKind::InvalidArgument => {
                tracing::warn!("Tool '{}' rejected its arguments: {}", tool, error)
            }
            _ => tracing::error!("Tool '{}' failed: {}", tool, error),
        }

        let message = error.to_string();
        let data = Some(serde_json::json!({ "kind": kind.as_str(), "tool": tool }));
        match kind {
            ErrorKind::InvalidArgument => McpError::invalid_params(message, data),
            ErrorKind::UnknownTool => McpError::invalid_request(message, data),
            ErrorKind::UpstreamFailure | ErrorKind::StartupFailure => {
                McpError::internal_error(message, data)
            }
        }
    }
}
