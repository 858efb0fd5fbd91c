//! Environment variable loading utilities
//!
//! This module provides common patterns for loading environment variables
//! with type conversion and fallback defaults.

use std::env;
use std::str::FromStr;

/// Load an environment variable with a string default
pub fn load_env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Load an environment variable as an Option<T>
pub fn load_env_optional<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Load an environment variable as a non-empty string, if present
pub fn load_env_non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Load an opt-in flag: only the exact string `"true"` turns it on
pub fn load_env_flag(key: &str) -> bool {
    matches!(env::var(key).as_deref(), Ok("true"))
}

/// Builder for loading multiple environment variables with consistent prefix
#[derive(Debug)]
pub struct EnvLoader {
    prefix: String,
}

impl EnvLoader {
    /// Create a new environment loader with the given prefix
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// Full variable name for a suffix
    pub fn key(&self, suffix: &str) -> String {
        format!("{}_{}", self.prefix, suffix)
    }

    /// Load a string value with default
    pub fn load_string(&self, suffix: &str, default: &str) -> String {
        load_env_string(&self.key(suffix), default)
    }

    /// Load an optional value
    pub fn load_optional<T>(&self, suffix: &str) -> Option<T>
    where
        T: FromStr,
    {
        load_env_optional(&self.key(suffix))
    }

    /// Load a non-empty string value
    pub fn load_non_empty(&self, suffix: &str) -> Option<String> {
        load_env_non_empty(&self.key(suffix))
    }

    /// Load an opt-in flag
    pub fn load_flag(&self, suffix: &str) -> bool {
        load_env_flag(&self.key(suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_env_string() {
        let key = "MCP_OBSIDIAN_TEST_STRING_VAR";
        let default = "default_value";

        env::remove_var(key);
        assert_eq!(load_env_string(key, default), default);

        env::set_var(key, "test_value");
        assert_eq!(load_env_string(key, default), "test_value");

        env::remove_var(key);
    }

    #[test]
    #[serial]
    fn test_load_env_optional() {
        let key = "MCP_OBSIDIAN_TEST_OPTIONAL_VAR";

        env::remove_var(key);
        assert_eq!(load_env_optional::<u16>(key), None);

        env::set_var(key, "8080");
        assert_eq!(load_env_optional::<u16>(key), Some(8080));

        env::set_var(key, "not a port");
        assert_eq!(load_env_optional::<u16>(key), None);

        env::remove_var(key);
    }

    #[test]
    #[serial]
    fn test_load_env_flag_requires_exact_true() {
        let key = "MCP_OBSIDIAN_TEST_FLAG_VAR";

        env::remove_var(key);
        assert!(!load_env_flag(key));

        for value in ["1", "TRUE", "yes", "True", " true"] {
            env::set_var(key, value);
            assert!(!load_env_flag(key), "{value:?} must not enable the flag");
        }

        env::set_var(key, "true");
        assert!(load_env_flag(key));

        env::remove_var(key);
    }

    #[test]
    #[serial]
    fn test_env_loader_prefix() {
        let loader = EnvLoader::new("MCP_OBSIDIAN_TEST");
        assert_eq!(loader.key("HOST"), "MCP_OBSIDIAN_TEST_HOST");

        env::set_var("MCP_OBSIDIAN_TEST_HOST", "   ");
        assert_eq!(loader.load_non_empty("HOST"), None);
        assert_eq!(loader.load_string("HOST", "127.0.0.1"), "   ");

        env::remove_var("MCP_OBSIDIAN_TEST_HOST");
        assert_eq!(loader.load_string("HOST", "127.0.0.1"), "127.0.0.1");
    }
}
