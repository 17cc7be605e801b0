use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for cookbook-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("Bump level '{0}' unknown")]
    UnknownBumpLevel(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`git {command}` failed with exit code {code}: {stderr}")]
    Subprocess {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Failed to execute `git {command}`: {source}")]
    SubprocessLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results in cookbook-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a version parsing error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        BumpError::Parse(msg.into())
    }

    /// Attach the offending path to an I/O failure
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BumpError::Io {
            path: path.into(),
            source,
        }
    }
}
