use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use coaching_backend::{logging, sync, CmsClient, SyncConfig};
use dotenvy::dotenv;
use tracing::error;

/// Usage: `sync-content [SNAPSHOT_PATH]`. The argument wins over the
/// `SNAPSHOT_PATH` environment variable.
async fn run() -> anyhow::Result<()> {
    let mut config = SyncConfig::from_env().context("Failed to load CMS settings")?;
    if let Some(path) = std::env::args_os().nth(1) {
        config.snapshot_path = PathBuf::from(path);
    }

    let client = CmsClient::new(config.cms).context("Failed to create CMS client")?;
    let summary = sync::run_sync(&client, &config.snapshot_path)
        .await
        .with_context(|| format!("Failed to sync content into {}", config.snapshot_path.display()))?;

    println!(
        "Synced {} posts, {} testimonials, {} packages -> {}",
        summary.posts,
        summary.testimonials,
        summary.packages,
        summary.path.display()
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    logging::init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
