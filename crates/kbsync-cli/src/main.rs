//! kbsync CLI - push changed documentation files into a Dify knowledge base
//!
//! Designed to run as a CI step after a docs change lands: invoked with no
//! arguments, it reads everything from the environment:
//!
//! - `DIFY_API_KEY` (required) - bearer token for the Dify API
//! - `DIFY_DATASET_ID` (required) - target dataset
//! - `DIFY_API_BASE` (optional) - API root, defaults to the public endpoint
//! - `CHANGED_FILES` (optional) - comma-separated paths to process
//!
//! Exits with status 1 when required configuration is missing (before any
//! request is made); otherwise exits 0, even if individual files failed —
//! per-file errors are logged and summarized, the batch is never aborted.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kbsync_core::config::SyncConfig;
use kbsync_dify::client::DifyClient;
use kbsync_dify::provider::DifyKnowledgeStore;
use kbsync_sync::engine::SyncEngine;
use kbsync_sync::filesystem::LocalFileSystemAdapter;

mod output;

use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "kbsync",
    version,
    about = "Sync changed documentation files into a Dify knowledge base"
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    // Step 1: Read configuration, once. Missing credentials abort here with
    // exit status 1, before a single request is made.
    let config = SyncConfig::from_env()?;

    info!(
        dataset_id = %config.dataset_id,
        api_base = %config.api_base,
        entries = config.changed_files.len(),
        "Loaded configuration"
    );

    // Step 2: Wire the adapters and the engine
    let client = DifyClient::with_base_url(
        &config.api_key,
        config.dataset_id.clone(),
        &config.api_base,
    );
    let store = Arc::new(DifyKnowledgeStore::new(client));
    let filesystem = Arc::new(LocalFileSystemAdapter::new());
    let engine = SyncEngine::new(store, filesystem);

    // Step 3: Run the pass
    let report = engine.sync(&config.changed_files).await;

    // Step 4: Render the report. Per-file failures never reach the exit
    // status; only the configuration check above can make this process
    // exit non-zero.
    output::render_report(format, &report);

    Ok(())
}
