//! Error types for configuration composition

use std::path::PathBuf;
use thiserror::Error;

/// Result type for composition operations
pub type Result<T> = std::result::Result<T, NoriError>;

/// Main error type for configuration composition
#[derive(Debug, Error)]
pub enum NoriError {
    /// Configuration assembly errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Ignore-file discovery was requested but nothing was found in the
    /// upward walk. Proceeding without the file would risk linting
    /// generated or vendored output, so this is fatal.
    #[error("No ignore file found walking up from '{start_dir}'")]
    MissingIgnoreFile { start_dir: PathBuf },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    MissingIgnoreFile,
    Io,
}

impl NoriError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            NoriError::Config { .. } => ErrorKind::Config,
            NoriError::MissingIgnoreFile { .. } => ErrorKind::MissingIgnoreFile,
            NoriError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing-ignore-file error
    pub fn missing_ignore_file(start_dir: impl Into<PathBuf>) -> Self {
        Self::MissingIgnoreFile {
            start_dir: start_dir.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<std::io::Error> for NoriError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: PathBuf::new(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(NoriError::config_error("bad").kind(), ErrorKind::Config);
        assert_eq!(
            NoriError::missing_ignore_file("/some/dir").kind(),
            ErrorKind::MissingIgnoreFile
        );
    }

    #[test]
    fn test_missing_ignore_file_message() {
        let err = NoriError::missing_ignore_file("/work/project");
        assert!(err.to_string().contains("/work/project"));
    }
}
