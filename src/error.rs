use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop the watcher. Anything here is fatal for the process.
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Cannot access watch root {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create watch root {path}: {source}")]
    Bootstrap {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AuditError {
    pub fn directory_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryAccess {
            path: path.into(),
            source,
        }
    }
}

/// Per-file failures. The loop reports these and moves on.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to read file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8 text: {path} (invalid byte at offset {valid_up_to})")]
    Decode { path: PathBuf, valid_up_to: usize },
}

pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_directory_access() {
        let err = AuditError::directory_access(
            "/watch/root",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(
            err.to_string(),
            "Cannot access watch root /watch/root: permission denied"
        );
    }

    #[test]
    fn test_error_display_read() {
        let err = AnalysisError::Read {
            path: PathBuf::from("/watch/root/a.py"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Failed to read file: /watch/root/a.py");
    }

    #[test]
    fn test_error_display_decode() {
        let err = AnalysisError::Decode {
            path: PathBuf::from("blob.bin"),
            valid_up_to: 3,
        };
        assert_eq!(
            err.to_string(),
            "File is not valid UTF-8 text: blob.bin (invalid byte at offset 3)"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: AuditError = ConfigError::NoRules.into();
        assert!(matches!(err, AuditError::Config(ConfigError::NoRules)));
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
