//! Error type for the fallible outer layers (storage and bookmark service).
//!
//! The normalizers themselves never fail; they repair or drop.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The URL could not be normalized into a safe http(s) URL.
    #[error("invalid or unsafe URL: {0}")]
    InvalidUrl(String),

    #[error("name must not be empty")]
    InvalidName,

    #[error("invalid username: {0}")]
    InvalidUsername(String),

    #[error("item not found: {0}")]
    ItemNotFound(i64),

    #[error("trash entry not found: {0}")]
    TrashEntryNotFound(i64),
}

impl NavError {
    pub(crate) fn io(path: impl Into<std::path::PathBuf>, source: std::io::Error) -> Self {
        NavError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type NavResult<T> = Result<T, NavError>;
