//! Journaling tool, registered only when `OBSIDIAN_ENABLE_JOURNALING=true`

pub mod entry;
