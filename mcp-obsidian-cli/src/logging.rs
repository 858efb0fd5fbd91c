//! Log output for the CLI
//!
//! stdout carries the MCP protocol, so logs always go to stderr. When
//! `OBSIDIAN_DEBUG_LOG` is set, a DEBUG copy is also appended to that file.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// A thread-safe writer that flushes and syncs the log file on every write.
///
/// Debug logs of a stdio server are usually read while the server is still
/// running, or after its host killed it, so nothing may sit in a buffer.
///
/// # Example
///
/// ```no_run
/// use std::io::Write;
/// use std::sync::{Arc, Mutex};
/// use std::fs::File;
/// use mcp_obsidian_cli::logging::FileWriterGuard;
///
/// let file = File::create("mcp-obsidian.log").unwrap();
/// let mut guard = FileWriterGuard::new(Arc::new(Mutex::new(file)));
/// guard.write_all(b"Log message\n").unwrap();
/// ```
#[derive(Clone)]
pub struct FileWriterGuard {
    file: Arc<Mutex<File>>,
}

impl FileWriterGuard {
    /// Creates a new `FileWriterGuard` wrapping the given file.
    pub fn new(file: Arc<Mutex<File>>) -> Self {
        Self { file }
    }

    fn with_file<T>(&self, f: impl FnOnce(&mut File) -> std::io::Result<T>) -> std::io::Result<T> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| std::io::Error::other("log file mutex poisoned"))?;
        f(&mut file)
    }
}

impl Write for FileWriterGuard {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.with_file(|file| {
            let written = file.write(buf)?;
            file.flush()?;
            file.sync_all()?;
            Ok(written)
        })
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.with_file(|file| {
            file.flush()?;
            file.sync_all()
        })
    }
}

/// Level for the stderr logger from the command-line flags
pub fn log_level(quiet: bool, debug: bool, verbose: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if debug {
        Level::DEBUG
    } else if verbose {
        Level::TRACE
    } else {
        Level::INFO
    }
}

/// Install the global subscriber.
///
/// stderr always receives events at `level`. With `debug_log` set, a second
/// layer appends everything at DEBUG and above to that file. If the file
/// cannot be opened, only the stderr layer is installed.
pub fn init(level: Level, debug_log: Option<&Path>) {
    let file_layer = debug_log.and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                let guard = FileWriterGuard::new(Arc::new(Mutex::new(file)));
                Some(
                    fmt::layer()
                        .with_writer(move || guard.clone())
                        .with_ansi(false)
                        .with_filter(LevelFilter::DEBUG),
                )
            }
            Err(e) => {
                eprintln!(
                    "Failed to open log file {}, using stderr only: {}",
                    path.display(),
                    e
                );
                None
            }
        }
    });

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(LevelFilter::from_level(level));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(path) = debug_log {
        tracing::debug!("Debug logging enabled, writing to: {}", path.display());
    }
}
