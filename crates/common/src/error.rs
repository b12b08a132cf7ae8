//! Error types shared across Hydra crates.

use std::path::PathBuf;

/// Top-level error type for Hydra export operations.
#[derive(Debug, thiserror::Error)]
pub enum HydraError {
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Host error: {message}")]
    Host { message: String },

    #[error("Archive error: {message}")]
    Archive { message: String },

    #[error("Imaging error: {message}")]
    Imaging { message: String },

    #[error("Metadata error: {message}")]
    Metadata { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using HydraError.
pub type HydraResult<T> = Result<T, HydraError>;

impl HydraError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    pub fn host(msg: impl Into<String>) -> Self {
        Self::Host {
            message: msg.into(),
        }
    }

    pub fn archive(msg: impl Into<String>) -> Self {
        Self::Archive {
            message: msg.into(),
        }
    }

    pub fn imaging(msg: impl Into<String>) -> Self {
        Self::Imaging {
            message: msg.into(),
        }
    }

    pub fn metadata(msg: impl Into<String>) -> Self {
        Self::Metadata {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}
