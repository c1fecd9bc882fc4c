//! SeaORM entities for the farmer-lookup service.
//! Farmers are keyed by NIC; farmland optionally points at its owner.

pub mod farmer;
pub mod farmland;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::farmer::Entity as Farmer;
    pub use super::farmland::Entity as Farmland;
}

#[cfg(test)]
mod test {
    use migration::{Migrator, MigratorTrait};
    use rust_decimal::Decimal;
    use sea_orm::{
        ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait,
        ModelTrait, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys so ON DELETE SET NULL is honoured
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    async fn insert_farmer(db: &DatabaseConnection, nic: &str, name: &str) -> Result<farmer::Model, DbErr> {
        farmer::ActiveModel {
            nic: Set(nic.to_string()),
            name: Set(name.to_string()),
            phone: Set(None),
            address: Set(None),
        }
        .insert(db)
        .await
    }

    async fn insert_land(
        db: &DatabaseConnection,
        nic: Option<&str>,
        crop_id: i32,
        location: &str,
    ) -> Result<farmland::Model, DbErr> {
        farmland::ActiveModel {
            nic: Set(nic.map(str::to_string)),
            crop_id: Set(crop_id),
            location: Set(location.to_string()),
            size_acres: Set(Decimal::new(250, 2)),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    #[tokio::test]
    async fn test_farmland_queries() -> Result<(), DbErr> {
        let db = setup_db().await?;

        insert_farmer(&db, "199012345678", "Nimal Perera").await?;
        insert_farmer(&db, "198811112222", "Kamala Silva").await?;

        insert_land(&db, Some("199012345678"), 3, "North field").await?;
        insert_land(&db, Some("199012345678"), farmland::NO_CROP, "River plot").await?;
        insert_land(&db, Some("198811112222"), 7, "Hill terrace").await?;
        insert_land(&db, None, farmland::NO_CROP, "Unclaimed paddy").await?;

        let owned = Farmland::find_by_farmer("199012345678").all(&db).await?;
        assert_eq!(owned.len(), 2);

        let cropped = Farmland::find_cropped_by_farmer("199012345678").all(&db).await?;
        assert_eq!(cropped.len(), 1);
        assert_eq!(cropped[0].location, "North field");
        assert!(cropped[0].is_cropped());

        let uncropped = Farmland::find_uncropped_by_farmer("199012345678").all(&db).await?;
        assert_eq!(uncropped.len(), 1);
        assert_eq!(uncropped[0].location, "River plot");
        assert!(!uncropped[0].is_cropped());

        let assigned = Farmland::find_assigned().all(&db).await?;
        assert_eq!(assigned.len(), 3);
        assert!(assigned.iter().all(farmland::Model::is_assigned));

        let unassigned = Farmland::find_unassigned().all(&db).await?;
        assert_eq!(unassigned.len(), 1);
        assert_eq!(unassigned[0].location, "Unclaimed paddy");

        let by_owner = Farmland::find_by_owner_and_location(Some("199012345678"), "River plot")
            .one(&db)
            .await?;
        assert!(by_owner.is_some());
        let other_owner = Farmland::find_by_owner_and_location(Some("198811112222"), "River plot")
            .one(&db)
            .await?;
        assert!(other_owner.is_none());
        let unowned = Farmland::find_by_owner_and_location(None, "Unclaimed paddy")
            .one(&db)
            .await?;
        assert!(unowned.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_deleting_farmer_unassigns_land() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let owner = insert_farmer(&db, "200056789012", "Sunil Fernando").await?;
        let land = insert_land(&db, Some("200056789012"), 4, "Estate").await?;

        let related = owner.find_related(Farmland).all(&db).await?;
        assert_eq!(related.len(), 1);

        owner.delete(&db).await?;

        let land = Farmland::find_by_id(land.id)
            .one(&db)
            .await?
            .expect("farmland survives its owner");
        assert_eq!(land.nic, None);
        assert_eq!(Farmer::find().all(&db).await?.len(), 0);

        Ok(())
    }
}
