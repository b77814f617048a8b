//! Downloads files from shared Drive links.
//!
//! Each link's file identifier is extracted from its `/d/<id>/` path segment
//! and fetched from the public download endpoint. Large files answer the
//! first request with a `download_warning*` cookie; its value is sent back as
//! `confirm=` to get the actual content. Files are processed one at a time
//! and a failing file never stops the rest of the batch.

pub mod batch;
pub mod client;
pub mod config;
pub mod error;
pub mod link;
pub mod manifest;

pub use batch::{BatchReport, FailedDownload, download_all};
pub use client::DriveClient;
pub use config::FetchConfig;
pub use error::{FetchError, Result};
pub use link::extract_file_id;
pub use manifest::Manifest;
