use anyhow::Result;
use common::FarmerDto;
use moka::future::Cache;
use sea_orm::Database;
use std::time::Duration;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Connect to the database and build the shared handler state.
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;
    debug!("Database connection established");

    Ok(AppState {
        db,
        cache: build_farmer_cache(),
    })
}

/// Farmer lookups are cached by NIC for five minutes.
pub fn build_farmer_cache() -> Cache<String, FarmerDto> {
    Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(300))
        .build()
}
