//! Downloader configuration.
use std::env;

/// Public download endpoint for shared files.
pub const DEFAULT_ENDPOINT: &str = "https://docs.google.com/uc";

/// Bytes buffered before each write to disk.
pub const DEFAULT_CHUNK_SIZE: usize = 32 * 1024;

#[derive(Clone, Debug)]
pub struct FetchConfig {
    pub endpoint: String,
    pub chunk_size: usize,
}

impl FetchConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DRIVE_ENDPOINT` - Download endpoint (default: `https://docs.google.com/uc`)
    /// - `DRIVE_CHUNK_SIZE` - Write chunk size in bytes (default: 32768)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(endpoint) = env::var("DRIVE_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Some(size) = read_env::<usize>("DRIVE_CHUNK_SIZE") {
            config.chunk_size = size.max(1);
        }

        config
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
