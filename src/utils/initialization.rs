use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::env_file::{load_env_file, load_env_file_from, EnvFileStatus};
use crate::config::{Config, DEFAULT_LOG_LEVEL, GEMINI_API_KEY_VAR};

/// Loads `.env` from the working directory, then reads the snapshot.
pub fn init_env() -> (Config, EnvFileStatus) {
    let status = load_env_file();
    (Config::from_env(), status)
}

pub fn init_env_from(path: &Path) -> (Config, EnvFileStatus) {
    let status = load_env_file_from(path);
    (Config::from_env(), status)
}

// RUST_LOG wins over the configured level when set.
pub fn log_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

pub fn init_tracing(log_level: &str) {
    // A subscriber may already be installed (tests, embedding binaries).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(log_level))
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn report(config: &Config, status: &EnvFileStatus) {
    match status {
        EnvFileStatus::Loaded(path) => info!("Loaded env file from {}", path.display()),
        EnvFileStatus::NotFound => info!("No env file found, using process environment"),
        EnvFileStatus::Unreadable(reason) => warn!("Ignoring unreadable env file: {}", reason),
    }

    info!(
        server_addr = %config.server_addr(),
        log_level = config.log_level(),
        api_key_set = config.has_api_key(),
        "Configuration resolved"
    );

    if !config.has_api_key() {
        warn!("{} is not set", GEMINI_API_KEY_VAR);
    }
}
