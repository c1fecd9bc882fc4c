use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod handlers;
mod openapi_tests;
mod router;
mod schemas;
mod test_utils;

use cli::Cli;

/// Entry point for the CropMaster farmer-lookup service.
#[tokio::main]
async fn main() -> Result<()> {
    // .env values feed clap's `env` fallbacks
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cropmaster=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    cli.run().await?;

    Ok(())
}
