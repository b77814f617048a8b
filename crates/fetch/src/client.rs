//! HTTP client for shared-link downloads.

use std::path::Path;

use tokio::{
    fs::File,
    io::{AsyncWriteExt, BufWriter},
};

use crate::config::FetchConfig;
use crate::error::{FetchError, Result};

/// Cookies starting with this prefix carry the confirmation token that
/// large files require.
const CONFIRM_COOKIE_PREFIX: &str = "download_warning";

/// Returns `true` for the cookie holding the large-file confirmation token.
pub fn is_confirm_cookie(name: &str) -> bool {
    name.starts_with(CONFIRM_COOKIE_PREFIX)
}

/// Download client.
///
/// Keeps a cookie store across requests, so the confirmation exchange runs
/// within a single session.
pub struct DriveClient {
    /// Download endpoint
    endpoint: String,

    /// Write buffer size
    chunk_size: usize,

    /// HTTP client
    http_client: reqwest::Client,
}

impl DriveClient {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            chunk_size: config.chunk_size.max(1),
            http_client,
        })
    }

    /// Downloads `file_id` into `destination`, returning the bytes written.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Network request fails
    /// - The server answers with a non-success status
    /// - The destination cannot be written
    ///
    /// A partially written file is left in place on failure.
    pub async fn download(&self, file_id: &str, destination: &Path) -> Result<u64> {
        let mut response = self.request(file_id, None).await?;

        let token = response
            .cookies()
            .find(|cookie| is_confirm_cookie(cookie.name()))
            .map(|cookie| cookie.value().to_owned());

        if let Some(token) = token {
            tracing::debug!("Confirmation required for {}", file_id);
            response = self.request(file_id, Some(&token)).await?;
        }

        let file = File::create(destination).await?;
        let mut writer = BufWriter::with_capacity(self.chunk_size, file);
        let mut written = 0u64;

        while let Some(chunk) = response.chunk().await? {
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        writer.flush().await?;

        tracing::debug!("{} bytes written to {}", written, destination.display());
        Ok(written)
    }

    async fn request(&self, file_id: &str, confirm: Option<&str>) -> Result<reqwest::Response> {
        let mut query = vec![("export", "download"), ("id", file_id)];
        if let Some(token) = confirm {
            query.push(("confirm", token));
        }

        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                file_id: file_id.to_owned(),
            });
        }

        Ok(response)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}
