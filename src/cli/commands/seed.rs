use anyhow::{Context, Result};
use model::entities::{farmer, farmland};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// Seed file layout.
#[derive(Debug, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub farmers: Vec<SeedFarmer>,
    #[serde(default)]
    pub farmlands: Vec<SeedFarmland>,
}

#[derive(Debug, Deserialize)]
pub struct SeedFarmer {
    pub nic: String,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedFarmland {
    pub nic: Option<String>,
    #[serde(default)]
    pub crop_id: i32,
    pub location: String,
    pub size_acres: Decimal,
}

/// Counts reported after a seed run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub farmers_inserted: usize,
    pub farmers_skipped: usize,
    pub farmlands_inserted: usize,
    pub farmlands_skipped: usize,
}

pub async fn seed(json_path: &str, database_url: &str) -> Result<()> {
    trace!("Entering seed function");
    info!("Starting seed import");
    debug!("JSON path: {}", json_path);
    debug!("Database URL: {}", database_url);

    let db = Database::connect(database_url)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");

    let data = load_seed_file(Path::new(json_path))?;
    let summary = apply_seed(&db, &data).await?;

    info!(
        "Seed completed: {} farmers inserted, {} skipped, {} farmlands inserted, {} skipped",
        summary.farmers_inserted,
        summary.farmers_skipped,
        summary.farmlands_inserted,
        summary.farmlands_skipped
    );
    Ok(())
}

pub fn load_seed_file(path: &Path) -> Result<SeedData> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    let data: SeedData = serde_json::from_reader(file).context("Failed to parse JSON")?;
    info!(
        "Loaded {} farmers and {} farmlands",
        data.farmers.len(),
        data.farmlands.len()
    );
    Ok(data)
}

/// Insert the seed data in one transaction. Farmers go first so farmland
/// owners resolve. Known NICs and plots already held at the same location
/// are skipped, so a rerun changes nothing.
pub async fn apply_seed(db: &DatabaseConnection, data: &SeedData) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();
    let txn = db.begin().await.context("Failed to start seed transaction")?;

    for seed_farmer in &data.farmers {
        let existing = farmer::Entity::find_by_id(seed_farmer.nic.clone())
            .one(&txn)
            .await?;
        if existing.is_some() {
            warn!("Farmer {} already exists, skipping", seed_farmer.nic);
            summary.farmers_skipped += 1;
            continue;
        }

        farmer::ActiveModel {
            nic: Set(seed_farmer.nic.clone()),
            name: Set(seed_farmer.name.clone()),
            phone: Set(seed_farmer.phone.clone()),
            address: Set(seed_farmer.address.clone()),
        }
        .insert(&txn)
        .await
        .with_context(|| format!("Failed to insert farmer {}", seed_farmer.nic))?;
        debug!("Imported farmer {}", seed_farmer.nic);
        summary.farmers_inserted += 1;
    }

    for land in &data.farmlands {
        let existing = farmland::Entity::find_by_owner_and_location(land.nic.as_deref(), &land.location)
            .one(&txn)
            .await?;
        if existing.is_some() {
            warn!("Farmland '{}' already exists, skipping", land.location);
            summary.farmlands_skipped += 1;
            continue;
        }

        let inserted = farmland::ActiveModel {
            nic: Set(land.nic.clone()),
            crop_id: Set(land.crop_id),
            location: Set(land.location.clone()),
            size_acres: Set(land.size_acres),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .with_context(|| format!("Failed to insert farmland '{}'", land.location))?;
        debug!("Imported farmland {} -> ID {}", land.location, inserted.id);
        summary.farmlands_inserted += 1;
    }

    txn.commit().await.context("Failed to commit seed transaction")?;
    Ok(summary)
}
