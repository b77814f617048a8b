//! Command line entry point for the shared-link downloader.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use drive_fetch::{DriveClient, FetchConfig, Manifest, download_all, manifest::parse_link};
use tracing_subscriber::EnvFilter;

/// Download files from shared Drive links
#[derive(Parser)]
#[command(name = "drive-fetch")]
#[command(about = "Download files from shared Drive links", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML manifest mapping output filenames to share links
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Extra file to download, as NAME=URL (repeatable)
    #[arg(short, long = "link", value_name = "NAME=URL", value_parser = parse_link)]
    links: Vec<(String, String)>,

    /// Directory where downloaded files are saved
    #[arg(short, long, default_value = "Downloads")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (for DRIVE_ENDPOINT and other env vars)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut manifest = match &cli.manifest {
        Some(path) => Manifest::load(path)
            .with_context(|| format!("Failed to load manifest: {}", path.display()))?,
        None => Manifest::default(),
    };
    for (name, url) in cli.links {
        manifest.insert(name, url);
    }

    if manifest.is_empty() {
        bail!("Nothing to download: pass --manifest and/or --link NAME=URL");
    }

    let config = FetchConfig::from_env();
    let client = DriveClient::new(&config).context("Failed to build HTTP client")?;

    let report = download_all(&client, manifest.iter(), &cli.out).await?;

    println!(
        "{} downloaded, {} failed",
        report.downloaded.len(),
        report.failed.len()
    );
    for failure in &report.failed {
        println!("  {}: {}", failure.filename, failure.reason);
    }

    Ok(())
}
