//! Error types for release operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for release operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Version parsing errors
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    /// External command errors
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// Required external tooling errors
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// Archive packaging errors
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Version string errors
#[derive(Error, Debug)]
pub enum VersionError {
    /// Version string does not match `v{major}.{minor}.{patch}`
    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion {
        /// Version string
        version: String,
        /// Reason for the error
        reason: String,
    },
}

/// External process errors
#[derive(Error, Debug)]
pub enum CommandError {
    /// Empty command line
    #[error("Cannot run an empty command")]
    Empty,

    /// Process could not be started
    #[error("Failed to start '{command}': {source}")]
    Spawn {
        /// Command that failed to start
        command: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// Process exited with a non-zero status
    #[error("Command '{command}' failed: {stderr}")]
    Failed {
        /// Command that failed
        command: String,
        /// Decoded standard error output
        stderr: String,
    },
}

/// Errors for required external tooling
#[derive(Error, Debug)]
pub enum ToolError {
    /// The GitHub CLI is missing or not authenticated
    #[error(
        "GitHub CLI is not installed or authenticated. Install and authenticate it: https://cli.github.com/ ({reason})"
    )]
    GhUnavailable {
        /// Reason reported by the auth check
        reason: String,
    },
}

/// Archive packaging errors
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// Directory traversal failed
    #[error("Failed to walk build output directory: {source}")]
    Walk {
        /// Underlying traversal error
        #[source]
        source: walkdir::Error,
    },

    /// File or directory IO failed
    #[error("IO error at {path}: {source}")]
    Io {
        /// Path involved in the failure
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Zip writing failed
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::Tool(ToolError::GhUnavailable { .. }) => vec![
                "Install the GitHub CLI: https://cli.github.com/".to_string(),
                "Authenticate it: gh auth login".to_string(),
            ],
            ReleaseError::Version(VersionError::InvalidVersion { .. }) => vec![
                "Pass the tag as v{major}.{minor}.{patch}, e.g. --tag v1.2.0".to_string(),
            ],
            ReleaseError::Command(CommandError::Failed { .. }) => vec![
                "Inspect the command's stderr output above".to_string(),
                "Re-run with --log debug for the full command transcript".to_string(),
            ],
            ReleaseError::Command(CommandError::Spawn { .. }) => vec![
                "Check that the executable is installed and on PATH".to_string(),
            ],
            _ => vec![],
        }
    }
}
