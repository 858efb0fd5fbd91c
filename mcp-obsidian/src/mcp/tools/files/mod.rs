//! File tools: listing, reading and deleting notes

pub mod batch_get;
pub mod delete;
pub mod get_contents;
pub mod list_dir;
pub mod list_vault;
