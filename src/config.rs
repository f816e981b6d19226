pub mod env_file;

use serde::Serialize;

use crate::utils::env::env_var;
use self::env_file::load_env_file;

pub const DEFAULT_SERVER_URL: &str = "localhost";
pub const DEFAULT_PORT: &str = "8900";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Immutable settings resolved once at startup and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    server_url: String,
    // Kept as text; the backend has always treated the port as a string.
    port: String,
    log_level: String,
    #[serde(skip)]
    api_key: Option<String>,
}

impl Config {
    /// Builds the snapshot from the current process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(env_var)
    }

    /// Builds the snapshot from an arbitrary variable lookup.
    ///
    /// Only the API key is looked up; host, port and log level are fixed.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            server_url: DEFAULT_SERVER_URL.to_string(),
            port: DEFAULT_PORT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            api_key: lookup(GEMINI_API_KEY_VAR),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_url, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Loads `.env` if one is present, then reads the configuration snapshot.
///
/// Never fails: a missing or unreadable env file leaves the process
/// environment as it was, and a missing API key is returned as `None`.
pub fn get_config() -> Config {
    load_env_file();
    Config::from_env()
}
