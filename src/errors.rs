//! Error types for the momentum release helper
//!
//! Errors are grouped per component and rolled up into a single [`AppError`]
//! at the top level. Every error is terminal: nothing is retried, and `main`
//! turns the error into the process exit code via [`AppError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// Manifest loading, patching and persistence errors
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found at the expected path
    #[error("manifest not found: {path}")]
    NotFound { path: PathBuf },

    /// Manifest contents are not valid JSON
    #[error("failed to parse manifest {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Manifest parsed but the top level is not a JSON object
    #[error("manifest {path} is not a JSON object")]
    NotAnObject { path: PathBuf },

    /// Manifest has no `dependencies` object to patch
    #[error("manifest {path} has no \"dependencies\" object")]
    MissingDependencies { path: PathBuf },

    /// I/O error reading the manifest
    #[error("failed to read manifest {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error writing the manifest back
    #[error("failed to write manifest {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization failed while persisting the manifest
    #[error("failed to serialize manifest {path}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Subprocess invocation errors
#[derive(Error, Debug)]
pub enum CommandError {
    /// The child process could not be spawned at all
    #[error("failed to spawn {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The child process ran and exited non-zero
    #[error("{label} failed with exit code {code}")]
    ExitStatus { label: String, code: i32 },

    /// The child process was terminated by a signal and reported no exit code
    #[error("{label} was terminated before exiting")]
    Terminated { label: String },
}

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest error
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Command error
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Generic I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic application error with context
    #[error("{message}")]
    Generic { message: String },
}

impl AppError {
    /// Create a generic application error with a message
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    ///
    /// A child process that exited non-zero propagates its own code; every
    /// other failure maps to the generic failure code 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Command(CommandError::ExitStatus { code, .. }) => *code,
            _ => 1,
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Manifest(_) => "manifest",
            AppError::Command(_) => "command",
            AppError::Io(_) => "io",
            AppError::Generic { .. } => "generic",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Manifest result type alias
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;

/// Command result type alias
pub type CommandResult<T> = std::result::Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_exit_status_propagates_child_code() {
        let err = AppError::Command(CommandError::ExitStatus {
            label: "npm install".to_string(),
            code: 7,
        });
        assert_eq!(err.exit_code(), 7);
        assert_eq!(err.category(), "command");
    }

    #[test]
    fn manifest_errors_exit_with_generic_code() {
        let err = AppError::Manifest(ManifestError::NotFound {
            path: PathBuf::from("package.json"),
        });
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.category(), "manifest");
    }

    #[test]
    fn terminated_child_exits_with_generic_code() {
        let err = AppError::Command(CommandError::Terminated {
            label: "npm install".to_string(),
        });
        assert_eq!(err.exit_code(), 1);
    }
}
