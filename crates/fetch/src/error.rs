//! Downloader errors.
use std::path::PathBuf;

/// Errors raised while resolving or downloading a single file.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to parse URL: {url}")]
    InvalidLink { url: String },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server answered {status} for file {file_id}")]
    Status {
        status: reqwest::StatusCode,
        file_id: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest: {0}")]
    Manifest(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
