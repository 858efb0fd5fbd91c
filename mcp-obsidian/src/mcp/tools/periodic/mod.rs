//! Periodic note tools (requires the Periodic Notes plugin)

pub mod note;
pub mod recent;
