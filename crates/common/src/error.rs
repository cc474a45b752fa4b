//! Error types shared across bitramp crates.

use std::path::PathBuf;

/// Top-level error type for bitramp operations.
#[derive(Debug, thiserror::Error)]
pub enum BitrampError {
    #[error("Cannot list frames directory {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using BitrampError.
pub type BitrampResult<T> = Result<T, BitrampError>;

impl BitrampError {
    pub fn directory_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryAccess {
            path: path.into(),
            source,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_access_message_names_path() {
        let err = BitrampError::directory_access(
            "frames",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("frames"), "unexpected message: {msg}");
        assert!(msg.contains("missing"), "unexpected message: {msg}");
    }

    #[test]
    fn test_config_error_message() {
        let err = BitrampError::config("exponent base must be greater than 1");
        assert_eq!(
            err.to_string(),
            "Configuration error: exponent base must be greater than 1"
        );
    }
}
