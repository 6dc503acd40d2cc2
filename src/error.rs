use std::path::PathBuf;

use thiserror::Error;

/// Step erraticism error types
#[derive(Error, Debug)]
pub enum ErraticismError {
    #[error("Invalid scoring configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed configuration file {}: {source}", .path.display())]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ErraticismError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ErraticismError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, ErraticismError>;
