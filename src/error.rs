//! Error taxonomy for namespace operations.
//!
//! Every command either fully succeeds or returns one of these errors
//! without touching the tree. The shell prints the `Display` text and
//! continues with the next prompt; nothing here is fatal.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FsError>;

/// Errors surfaced by the command API and path resolver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    #[error("no such file or directory: {0}")]
    NotFound(String),

    #[error("already exists: {0}")]
    AlreadyExists(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),

    #[error("is a directory: {0}")]
    IsADirectory(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl FsError {
    pub fn not_found(path: impl Into<String>) -> Self {
        FsError::NotFound(path.into())
    }

    pub fn already_exists(path: impl Into<String>) -> Self {
        FsError::AlreadyExists(path.into())
    }

    pub fn not_a_directory(path: impl Into<String>) -> Self {
        FsError::NotADirectory(path.into())
    }

    pub fn is_a_directory(path: impl Into<String>) -> Self {
        FsError::IsADirectory(path.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        FsError::InvalidArgument(msg.into())
    }
}

/// Startup errors: configuration loading and logging initialization.
///
/// These are reported once by the binary and never reach the command loop.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to read config file {path}: {reason}")]
    ConfigRead { path: String, reason: String },

    #[error("invalid config file {path}: {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("invalid log directive: {0}")]
    InvalidLogDirective(String),

    #[error("invalid log format: {0} (must be 'json' or 'text')")]
    InvalidLogFormat(String),
}
