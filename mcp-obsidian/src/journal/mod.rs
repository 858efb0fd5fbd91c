//! Reflective journal entries for agents
//!
//! A journal entry is a timestamped, typed note appended to a per-agent,
//! per-day log file inside the vault:
//!
//! ```text
//! {project_dir}/work-logs/{YYYY-MM-DD}/{agent}.log
//! ```
//!
//! Entries are validated before anything touches the vault, rendered into a
//! canonical text block that ends with a `---` separator, and appended. The
//! file has no header or index; readers consume it sequentially.

mod clock;
mod format;
mod path;
mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use format::{format_entry, format_entry_at, ENTRY_SEPARATOR};
pub use path::{journal_path, journal_path_on, WORK_LOGS_DIR};
pub use validation::{validate_entry, Confidence, INVALID_AGENT_CHARS};
