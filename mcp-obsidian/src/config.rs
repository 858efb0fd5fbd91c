//! Configuration management for mcp-obsidian
//!
//! All settings come from `OBSIDIAN_*` environment variables and are resolved
//! exactly once, at startup, into an immutable [`Config`]. Nothing else in the
//! crate reads the environment.

use crate::common::env_loader::EnvLoader;
use crate::error::{ObsidianError, Result};
use std::path::PathBuf;

const ENV_PREFIX: &str = "OBSIDIAN";
const DEFAULT_PROTOCOL: &str = "https";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 27124;
const DEFAULT_TIMEOUT_SECS: u64 = 6;

/// Startup-time switches that decide which tools get registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureToggles {
    /// Register `obsidian_simple_search` (default: true)
    pub simple_search_enabled: bool,
    /// Register `obsidian_journal_entry` (default: false)
    pub journaling_enabled: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            simple_search_enabled: true,
            journaling_enabled: false,
        }
    }
}

/// Connection settings for the Obsidian Local REST API
#[derive(Debug, Clone)]
pub struct VaultSettings {
    /// Bearer token sent with every request
    pub api_key: String,
    /// `http` or `https`
    pub protocol: String,
    /// Host running Obsidian
    pub host: String,
    /// REST API port
    pub port: u16,
    /// PEM certificate to trust, read from a file
    pub cert_path: Option<PathBuf>,
    /// PEM certificate to trust, base64-encoded
    pub cert_base64: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl VaultSettings {
    /// Settings for the default local endpoint with the given credential
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            protocol: DEFAULT_PROTOCOL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cert_path: None,
            cert_base64: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// `{protocol}://{host}:{port}`
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}

/// Configuration settings for the mcp-obsidian server
#[derive(Debug, Clone)]
pub struct Config {
    /// Vault connection
    pub vault: VaultSettings,
    /// Tool registration switches
    pub toggles: FeatureToggles,
    /// Optional DEBUG log file
    pub debug_log: Option<PathBuf>,
}

impl Config {
    /// Resolve the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ObsidianError::Config`] when `OBSIDIAN_API_KEY` is missing or
    /// empty, when the protocol is not `http`/`https`, or when the port is not
    /// a valid u16. These are startup failures: the server must not start.
    pub fn from_env() -> Result<Self> {
        let loader = EnvLoader::new(ENV_PREFIX);

        let api_key = loader.load_non_empty("API_KEY").ok_or_else(|| {
            let cwd = std::env::current_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "<unknown>".to_string());
            ObsidianError::Config(format!(
                "{} environment variable required. Working directory: {cwd}",
                loader.key("API_KEY")
            ))
        })?;

        let protocol = loader.load_string("PROTOCOL", DEFAULT_PROTOCOL).to_lowercase();
        if protocol != "http" && protocol != "https" {
            return Err(ObsidianError::Config(format!(
                "{} must be 'http' or 'https', got: {protocol}",
                loader.key("PROTOCOL")
            )));
        }

        let port = match loader.load_non_empty("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                ObsidianError::Config(format!(
                    "{} must be a port number, got: {raw}",
                    loader.key("PORT")
                ))
            })?,
            None => DEFAULT_PORT,
        };

        let vault = VaultSettings {
            api_key,
            protocol,
            host: loader.load_string("HOST", DEFAULT_HOST),
            port,
            cert_path: loader.load_non_empty("SSL_CERT_PATH").map(PathBuf::from),
            cert_base64: loader.load_non_empty("SSL_CERT_BASE64"),
            timeout_secs: loader
                .load_optional("TIMEOUT_SECS")
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        let toggles = FeatureToggles {
            simple_search_enabled: !loader.load_flag("DISABLE_SIMPLE_SEARCH"),
            journaling_enabled: loader.load_flag("ENABLE_JOURNALING"),
        };

        let config = Self {
            vault,
            toggles,
            debug_log: loader.load_non_empty("DEBUG_LOG").map(PathBuf::from),
        };

        tracing::debug!(
            "Resolved configuration: base_url={}, custom_cert={}, toggles={:?}",
            config.vault.base_url(),
            config.vault.cert_path.is_some() || config.vault.cert_base64.is_some(),
            config.toggles
        );

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 10] = [
        "OBSIDIAN_API_KEY",
        "OBSIDIAN_PROTOCOL",
        "OBSIDIAN_HOST",
        "OBSIDIAN_PORT",
        "OBSIDIAN_SSL_CERT_PATH",
        "OBSIDIAN_SSL_CERT_BASE64",
        "OBSIDIAN_TIMEOUT_SECS",
        "OBSIDIAN_DISABLE_SIMPLE_SEARCH",
        "OBSIDIAN_ENABLE_JOURNALING",
        "OBSIDIAN_DEBUG_LOG",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_missing_api_key_is_startup_failure() {
        clear_env();

        let error = Config::from_env().unwrap_err();
        assert_eq!(error.kind(), crate::ErrorKind::StartupFailure);
        assert!(error.to_string().contains("OBSIDIAN_API_KEY"));

        env::set_var("OBSIDIAN_API_KEY", "  ");
        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        env::set_var("OBSIDIAN_API_KEY", "secret");

        let config = Config::from_env().unwrap();
        assert_eq!(config.vault.api_key, "secret");
        assert_eq!(config.vault.base_url(), "https://127.0.0.1:27124");
        assert_eq!(config.vault.timeout_secs, 6);
        assert!(config.vault.cert_path.is_none());
        assert_eq!(config.toggles, FeatureToggles::default());
        assert!(config.toggles.simple_search_enabled);
        assert!(!config.toggles.journaling_enabled);
        assert!(config.debug_log.is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        env::set_var("OBSIDIAN_API_KEY", "secret");
        env::set_var("OBSIDIAN_PROTOCOL", "HTTP");
        env::set_var("OBSIDIAN_HOST", "vault.local");
        env::set_var("OBSIDIAN_PORT", "27123");
        env::set_var("OBSIDIAN_SSL_CERT_PATH", "/etc/obsidian.pem");
        env::set_var("OBSIDIAN_DISABLE_SIMPLE_SEARCH", "true");
        env::set_var("OBSIDIAN_ENABLE_JOURNALING", "true");
        env::set_var("OBSIDIAN_DEBUG_LOG", "/tmp/mcp-obsidian.log");

        let config = Config::from_env().unwrap();
        assert_eq!(config.vault.base_url(), "http://vault.local:27123");
        assert_eq!(
            config.vault.cert_path,
            Some(PathBuf::from("/etc/obsidian.pem"))
        );
        assert!(!config.toggles.simple_search_enabled);
        assert!(config.toggles.journaling_enabled);
        assert_eq!(
            config.debug_log,
            Some(PathBuf::from("/tmp/mcp-obsidian.log"))
        );

        clear_env();
    }

    #[test]
    #[serial]
    fn test_toggles_ignore_non_exact_values() {
        clear_env();
        env::set_var("OBSIDIAN_API_KEY", "secret");
        env::set_var("OBSIDIAN_DISABLE_SIMPLE_SEARCH", "1");
        env::set_var("OBSIDIAN_ENABLE_JOURNALING", "yes");

        let config = Config::from_env().unwrap();
        assert!(config.toggles.simple_search_enabled);
        assert!(!config.toggles.journaling_enabled);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_protocol_and_port() {
        clear_env();
        env::set_var("OBSIDIAN_API_KEY", "secret");

        env::set_var("OBSIDIAN_PROTOCOL", "ftp");
        let error = Config::from_env().unwrap_err();
        assert!(error.to_string().contains("OBSIDIAN_PROTOCOL"));
        env::remove_var("OBSIDIAN_PROTOCOL");

        env::set_var("OBSIDIAN_PORT", "99999");
        let error = Config::from_env().unwrap_err();
        assert!(error.to_string().contains("OBSIDIAN_PORT"));

        clear_env();
    }
}
