//! Error types for the reconciler
//!
//! Every error is terminal: it is printed once and mapped to a process exit code.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Exit status when the expected and observed sets are equal
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status when the sets differ or the run was aborted
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for invalid invocation arguments
pub const EXIT_USAGE: i32 = 2;

#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Could not read file {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid pattern")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to serialize report")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReconcileError>;

impl ReconcileError {
    pub fn invalid_arguments(msg: &str) -> Self {
        Self::InvalidArguments(msg.to_string())
    }

    pub fn file_access(path: &Path, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn config(msg: &str) -> Self {
        Self::Config(msg.to_string())
    }

    /// True when the underlying cause is a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::FileAccess { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArguments(_) | Self::Config(_) => EXIT_USAGE,
            Self::FileAccess { .. } | Self::Pattern(_) | Self::Serialization(_) => EXIT_FAILURE,
        }
    }
}

impl From<config::ConfigError> for ReconcileError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
