//! Common utilities shared across the crate

pub mod env_loader;

pub use env_loader::EnvLoader;
