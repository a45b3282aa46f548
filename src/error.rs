//! Error types for the declaration indexer
//!
//! Structured error types using thiserror. Malformed declarations inside a
//! file are never errors; these variants cover the collaborators (parser,
//! position table, signature renderer) and the loading/configuration layer.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for indexing operations
#[derive(Error, Debug)]
pub enum IndexError {
    /// File system errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Parser setup errors
    #[error("Failed to initialize {language} parser: {reason}")]
    ParserInit { language: String, reason: String },

    /// Parsing errors
    #[error("Failed to parse {language} file '{path}': {reason}")]
    ParseError {
        path: PathBuf,
        language: String,
        reason: String,
    },

    /// Position table errors
    #[error("Offset {offset} is outside '{path}' ({len} bytes)")]
    PositionOutOfRange {
        path: String,
        offset: usize,
        len: usize,
    },

    /// Signature renderer errors
    #[error("Failed to render signature for {node_kind} at byte {offset}: {reason}")]
    SignatureError {
        node_kind: String,
        offset: usize,
        reason: String,
    },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },

    /// Worker pool errors
    #[error("Failed to build indexing thread pool: {reason}")]
    ThreadPool { reason: String },
}

impl IndexError {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that embedders can use for programmatic
    /// error handling.
    pub fn status_code(&self) -> String {
        match self {
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::FileWrite { .. } => "FILE_WRITE_ERROR",
            Self::ParserInit { .. } => "PARSER_INIT_ERROR",
            Self::ParseError { .. } => "PARSE_ERROR",
            Self::PositionOutOfRange { .. } => "POSITION_OUT_OF_RANGE",
            Self::SignatureError { .. } => "SIGNATURE_ERROR",
            Self::ConfigError { .. } => "CONFIG_ERROR",
            Self::ThreadPool { .. } => "THREAD_POOL_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::FileRead { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Ensure the file is valid UTF-8",
            ],
            Self::FileWrite { .. } => vec![
                "Check that the parent directory is writable",
            ],
            Self::ParserInit { .. } => vec![
                "Check that tree-sitter and tree-sitter-go use compatible ABI versions",
            ],
            Self::PositionOutOfRange { .. } => vec![
                "Resolve offsets only against the file they were produced from",
            ],
            Self::ConfigError { .. } => vec![
                "Check .declindex/settings.toml for typos",
                "Unset DI_* environment variables to fall back to defaults",
            ],
            Self::ThreadPool { .. } => vec![
                "Lower indexing.parallel_threads or use sequential indexing",
            ],
            _ => vec![],
        }
    }
}

/// Result type alias for index operations
pub type IndexResult<T> = Result<T, IndexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_are_stable() {
        let err = IndexError::PositionOutOfRange {
            path: "a.go".to_string(),
            offset: 99,
            len: 10,
        };
        assert_eq!(err.status_code(), "POSITION_OUT_OF_RANGE");
        assert_eq!(err.to_string(), "Offset 99 is outside 'a.go' (10 bytes)");
        assert!(!err.recovery_suggestions().is_empty());
    }

    #[test]
    fn test_read_and_write_errors_are_distinct() {
        let read = IndexError::FileRead {
            path: PathBuf::from("a.go"),
            source: std::io::Error::other("boom"),
        };
        let write = IndexError::FileWrite {
            path: PathBuf::from("settings.toml"),
            source: std::io::Error::other("boom"),
        };

        assert_eq!(read.status_code(), "FILE_READ_ERROR");
        assert_eq!(write.status_code(), "FILE_WRITE_ERROR");
        assert_eq!(write.to_string(), "Failed to write file 'settings.toml': boom");
    }
}
