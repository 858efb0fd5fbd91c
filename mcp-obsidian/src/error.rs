//! Unified error handling for mcp-obsidian
//!
//! Every fallible operation in the library returns [`Result`]. The variants of
//! [`ObsidianError`] collapse into four coarse [`ErrorKind`]s, which is what the
//! MCP boundary reports to clients.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The main error type for the mcp-obsidian library
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ObsidianError {
    /// Caller-supplied arguments violate a tool contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No tool with this name is registered
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The vault REST API answered with an error status
    #[error("Error {code}: {message}")]
    Api {
        /// `errorCode` reported by the API, or the HTTP status
        code: i64,
        /// Message reported by the API
        message: String,
    },

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or missing startup configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of an [`ObsidianError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Recoverable by the caller correcting its input
    InvalidArgument,
    /// Tool name not in the registry
    UnknownTool,
    /// The vault capability failed; surfaced without retry
    UpstreamFailure,
    /// Fatal, the process must not serve requests
    StartupFailure,
}

impl ErrorKind {
    /// Stable snake_case identifier used in structured error payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::UnknownTool => "unknown_tool",
            ErrorKind::UpstreamFailure => "upstream_failure",
            ErrorKind::StartupFailure => "startup_failure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ObsidianError {
    /// Shorthand for [`ObsidianError::InvalidArgument`]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ObsidianError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            ObsidianError::UnknownTool(_) => ErrorKind::UnknownTool,
            ObsidianError::Api { .. } | ObsidianError::Http(_) | ObsidianError::Json(_) => {
                ErrorKind::UpstreamFailure
            }
            ObsidianError::Config(_) => ErrorKind::StartupFailure,
        }
    }
}

/// Result type alias for mcp-obsidian operations
pub type Result<T> = std::result::Result<T, ObsidianError>;
