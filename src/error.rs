use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for bump-version operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Failed to read manifest {}: {reason}", .path.display())]
    ManifestRead { path: PathBuf, reason: String },

    #[error("Version parsing error: {0}")]
    VersionParse(String),

    #[error("Failed to run {program}: {source}")]
    DelegateSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}", describe_exit(.code))]
    DelegateFailure { program: String, code: Option<i32> },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in bump-version
pub type Result<T> = std::result::Result<T, BumpError>;

fn describe_exit(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl BumpError {
    /// Create a usage error with context
    pub fn usage(msg: impl Into<String>) -> Self {
        BumpError::Usage(msg.into())
    }

    /// Create a version parsing error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumpError::VersionParse(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a manifest read error for the given path
    pub fn manifest(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        BumpError::ManifestRead {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Process exit code for this error.
    ///
    /// A failed delegate propagates its own exit code; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            BumpError::DelegateFailure {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}
