//! # Configuration
//!
//! [`MailboxConfig`] holds everything needed to talk to the mailbox.org
//! Business API.
//!
//! ## Loading Priority
//!
//! Configuration is loaded from the first source that provides a value:
//!
//! 1. Explicit struct fields (programmatic construction)
//! 2. TOML config file at an explicit path
//! 3. File named by the `MAILBOX_API_CONFIG` environment variable
//! 4. `./mailbox-api.toml` in the current directory
//! 5. `~/.config/mailbox-org-api/mailbox-api.toml`
//! 6. Environment variables (`MAILBOX_API_USER`, `MAILBOX_API_PASSWORD`)
//!
//! Credentials and the API URL can always be overridden by environment
//! variables, even when loading from a file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{MailboxError, MailboxResult};

/// Default API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.mailbox.org/v1/";

/// Default per-request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default TCP/TLS connect timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

const ENV_USER: &str = "MAILBOX_API_USER";
const ENV_PASSWORD: &str = "MAILBOX_API_PASSWORD";
const ENV_URL: &str = "MAILBOX_API_URL";
const ENV_CONFIG: &str = "MAILBOX_API_CONFIG";

const CONFIG_FILE_NAME: &str = "mailbox-api.toml";

/// Configuration for the mailbox.org API client.
///
/// # Examples
///
/// ```no_run
/// use mailbox_org_api::config::MailboxConfig;
///
/// // Set MAILBOX_API_USER and MAILBOX_API_PASSWORD, then:
/// let config = MailboxConfig::from_env().expect("Missing env vars");
/// ```
///
/// ```
/// use mailbox_org_api::config::MailboxConfig;
///
/// let config = MailboxConfig::new("admin-account", "secret");
/// assert_eq!(config.api_url, mailbox_org_api::config::DEFAULT_API_URL);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailboxConfig {
    /// Account name used for `auth`.
    pub username: String,

    /// Account password used for `auth`.
    pub password: String,

    /// JSON-RPC endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Custom `User-Agent` header. The HTTP client default is used when unset.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Ignore `HTTP(S)_PROXY` environment settings.
    #[serde(default)]
    pub disable_system_proxy: bool,

    /// Timeout configuration.
    #[serde(default)]
    pub timeouts: TimeoutConfig,
}

/// Timeout settings for HTTP calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    /// Whole-request timeout, in seconds. Expiry surfaces as a transport error.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Connection establishment timeout, in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

// ─── Defaults ───────────────────────────────────────────────────────────

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

// ─── MailboxConfig impl ─────────────────────────────────────────────────

impl MailboxConfig {
    /// Create a config with just credentials (all other fields use defaults).
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            api_url: default_api_url(),
            user_agent: None,
            disable_system_proxy: false,
            timeouts: TimeoutConfig::default(),
        }
    }

    /// Load config from environment variables.
    ///
    /// Required: `MAILBOX_API_USER`, `MAILBOX_API_PASSWORD`
    ///
    /// Optional: `MAILBOX_API_URL`
    pub fn from_env() -> MailboxResult<Self> {
        let username = std::env::var(ENV_USER).map_err(|_| MailboxError::Config {
            reason: format!("{ENV_USER} environment variable not set"),
        })?;
        let password = std::env::var(ENV_PASSWORD).map_err(|_| MailboxError::Config {
            reason: format!("{ENV_PASSWORD} environment variable not set"),
        })?;

        let mut config = Self::new(username, password);
        if let Ok(url) = std::env::var(ENV_URL) {
            config.api_url = url;
        }

        Ok(config)
    }

    /// Load config from a TOML file, with environment variable overrides.
    #[cfg(feature = "config-toml")]
    pub fn from_file(path: impl AsRef<Path>) -> MailboxResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| MailboxError::Config {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        let mut config: Self = toml::from_str(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Discover and load config from the standard search path, falling back
    /// to environment variables when no file is found.
    #[cfg(feature = "config-toml")]
    pub fn discover(explicit_path: Option<&Path>) -> MailboxResult<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        if let Ok(path) = std::env::var(ENV_CONFIG) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        let local_path = PathBuf::from(CONFIG_FILE_NAME);
        if local_path.exists() {
            return Self::from_file(&local_path);
        }

        if let Some(user_path) = user_config_path() {
            if user_path.exists() {
                return Self::from_file(&user_path);
            }
        }

        Self::from_env()
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> MailboxResult<()> {
        if !(self.api_url.starts_with("https://") || self.api_url.starts_with("http://")) {
            return Err(MailboxError::Config {
                reason: format!("api_url must be an http(s) URL, got '{}'", self.api_url),
            });
        }
        if self.timeouts.request_timeout_secs == 0 {
            return Err(MailboxError::Config {
                reason: "timeouts.request_timeout_secs must be greater than zero".into(),
            });
        }
        Ok(())
    }

    #[cfg(feature = "config-toml")]
    fn apply_env_overrides(&mut self) {
        if let Ok(user) = std::env::var(ENV_USER) {
            self.username = user;
        }
        if let Ok(password) = std::env::var(ENV_PASSWORD) {
            self.password = password;
        }
        if let Ok(url) = std::env::var(ENV_URL) {
            self.api_url = url;
        }
    }
}

/// Platform-appropriate user config file path.
#[cfg(feature = "config-toml")]
fn user_config_path() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|dir| PathBuf::from(dir).join("mailbox-org-api").join(CONFIG_FILE_NAME))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME").ok().map(|dir| {
            PathBuf::from(dir)
                .join(".config")
                .join("mailbox-org-api")
                .join(CONFIG_FILE_NAME)
        })
    }
}
