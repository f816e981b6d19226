pub mod config;
pub mod utils;

pub use config::env_file::EnvFileStatus;
pub use config::{get_config, Config};
