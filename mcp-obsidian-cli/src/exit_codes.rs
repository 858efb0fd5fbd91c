//! Exit code constants for CLI commands
//!
//! - 0: Success
//! - 1: The server could not start or stopped with an error
//! - 2: A tool call or argument error

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Startup or server failure
pub const EXIT_WARNING: i32 = 1;

/// Tool call failed or arguments were rejected
pub const EXIT_ERROR: i32 = 2;
