use std::process::ExitCode;

use anyhow::Context;
use coaching_backend::{logging, sync, CmsClient, SyncConfig};
use dotenvy::dotenv;
use tracing::error;

async fn run() -> anyhow::Result<()> {
    let config = SyncConfig::from_env().context("Failed to load CMS settings")?;
    let client = CmsClient::new(config.cms).context("Failed to create CMS client")?;
    let report = sync::run_verify(&client)
        .await
        .context("Failed to query the CMS")?;

    println!("posts:        {}", report.posts);
    println!("testimonials: {}", report.testimonials);
    println!("packages:     {}", report.packages);
    if report.skipped > 0 {
        println!("skipped:      {}", report.skipped);
    }
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
