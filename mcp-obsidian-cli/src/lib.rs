//! mcp-obsidian CLI Library
//!
//! Command-line definitions, logging setup and exit codes for the
//! `mcp-obsidian` binary.

/// Command-line interface definitions and argument parsing
pub mod cli;
/// Exit codes used by the CLI application
pub mod exit_codes;
/// Log output configuration
pub mod logging;
