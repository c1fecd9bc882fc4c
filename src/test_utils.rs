#[cfg(test)]
pub mod test_utils {
    use crate::config::build_farmer_cache;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use migration::{Migrator, MigratorTrait};
    use model::entities::{farmer, farmland};
    use rust_decimal::Decimal;
    use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, Set};
    use std::str::FromStr;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const SEEDED_NIC: &str = "199012345678";
    pub const SECOND_NIC: &str = "851234567V";

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // SQLite leaves foreign keys off unless asked
        db.execute_unprepared("PRAGMA foreign_keys = ON")
            .await
            .expect("Failed to enable foreign keys");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    async fn insert_land(db: &DatabaseConnection, nic: Option<&str>, crop_id: i32, location: &str, size: &str) {
        farmland::ActiveModel {
            nic: Set(nic.map(str::to_string)),
            crop_id: Set(crop_id),
            location: Set(location.to_string()),
            size_acres: Set(Decimal::from_str(size).unwrap()),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create test farmland");
    }

    /// AppState with two farmers and a few plots.
    ///
    /// `SEEDED_NIC` owns one planted and one bare plot, `SECOND_NIC` owns
    /// nothing, and one plot is unassigned.
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;

        farmer::ActiveModel {
            nic: Set(SEEDED_NIC.to_string()),
            name: Set("Nimal Perera".to_string()),
            phone: Set(Some("0771234567".to_string())),
            address: Set(Some("Kurunegala".to_string())),
        }
        .insert(&db)
        .await
        .expect("Failed to create test farmer 1");

        farmer::ActiveModel {
            nic: Set(SECOND_NIC.to_string()),
            name: Set("Kamala Silva".to_string()),
            phone: Set(None),
            address: Set(None),
        }
        .insert(&db)
        .await
        .expect("Failed to create test farmer 2");

        insert_land(&db, Some(SEEDED_NIC), 3, "North paddy", "2.50").await;
        insert_land(&db, Some(SEEDED_NIC), farmland::NO_CROP, "Hill plot", "1.25").await;
        insert_land(&db, None, farmland::NO_CROP, "Reservoir edge", "4.00").await;

        AppState {
            db,
            cache: build_farmer_cache(),
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The level comes from RUST_LOG and defaults to WARN.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let _guard = init_test_tracing();

        let state = setup_test_app_state().await;
        create_router(state)
    }
}
