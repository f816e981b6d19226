use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of the best-effort `.env` load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileStatus {
    Loaded(PathBuf),
    NotFound,
    Unreadable(String),
}

impl EnvFileStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, EnvFileStatus::Loaded(_))
    }
}

// Variables already present in the process are left untouched by dotenv.
pub fn load_env_file() -> EnvFileStatus {
    match dotenv::dotenv() {
        Ok(path) => EnvFileStatus::Loaded(path),
        Err(e) => classify(e),
    }
}

pub fn load_env_file_from(path: &Path) -> EnvFileStatus {
    match dotenv::from_path(path) {
        Ok(()) => EnvFileStatus::Loaded(path.to_path_buf()),
        Err(e) => classify(e),
    }
}

fn classify(err: dotenv::Error) -> EnvFileStatus {
    match err {
        dotenv::Error::Io(ref io) if io.kind() == ErrorKind::NotFound => {
            debug!("No env file found, using process environment");
            EnvFileStatus::NotFound
        }
        other => {
            debug!("Env file could not be loaded: {}", other);
            EnvFileStatus::Unreadable(other.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let status = load_env_file_from(&dir.path().join(".env"));
        assert_eq!(status, EnvFileStatus::NotFound);
        assert!(!status.is_loaded());
    }

    #[test]
    fn directory_instead_of_file_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let status = load_env_file_from(dir.path());
        assert!(matches!(status, EnvFileStatus::Unreadable(_)));
    }
}
