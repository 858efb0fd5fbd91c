//! Content tools: writing to notes

pub mod append;
pub mod patch;
pub mod put;
