//! Sequential batch downloads with per-file failure isolation.

use std::path::{Path, PathBuf};

use crate::client::DriveClient;
use crate::error::{FetchError, Result};
use crate::link::extract_file_id;

/// A file that could not be downloaded, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDownload {
    pub filename: String,
    pub reason: String,
}

/// Outcome of a batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub downloaded: Vec<PathBuf>,
    pub failed: Vec<FailedDownload>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Downloads every `(filename, share link)` pair into `save_dir`, one at a
/// time.
///
/// `save_dir` is created if missing; failing to create it is the only error
/// that aborts the batch. Unparseable links and failed downloads are logged,
/// recorded in the report and skipped.
pub async fn download_all<'a, I>(
    client: &DriveClient,
    files: I,
    save_dir: &Path,
) -> Result<BatchReport>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    tokio::fs::create_dir_all(save_dir)
        .await
        .map_err(|source| FetchError::CreateDir {
            path: save_dir.to_path_buf(),
            source,
        })?;

    let mut report = BatchReport::default();

    for (filename, url) in files {
        tracing::info!("Downloading {}...", filename);

        let file_id = match extract_file_id(url) {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!("{}", err);
                report.failed.push(FailedDownload {
                    filename: filename.to_owned(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let destination = save_dir.join(filename);
        match client.download(file_id, &destination).await {
            Ok(bytes) => {
                tracing::info!(
                    "Downloaded {} to {} ({} bytes).",
                    filename,
                    destination.display(),
                    bytes
                );
                report.downloaded.push(destination);
            }
            Err(err) => {
                tracing::warn!("Failed to download {}: {}", filename, err);
                report.failed.push(FailedDownload {
                    filename: filename.to_owned(),
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(report)
}
