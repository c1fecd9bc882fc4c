use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryFilter, QueryOrder, Select};
use tracing::trace;

/// Crop id stored for land with nothing planted on it.
pub const NO_CROP: i32 = 0;

/// A plot of farmland. Unassigned plots have no owner NIC.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "farmlands")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Owning farmer. Cleared when the farmer is removed.
    pub nic: Option<String>,
    /// Planted crop, or [`NO_CROP`].
    #[sea_orm(default_value = 0)]
    pub crop_id: i32,
    pub location: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub size_acres: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::farmer::Entity",
        from = "Column::Nic",
        to = "super::farmer::Column::Nic",
        on_delete = "SetNull",
        on_update = "Cascade"
    )]
    Farmer,
}

impl Related<super::farmer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Farmer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_cropped(&self) -> bool {
        self.crop_id != NO_CROP
    }

    pub fn is_assigned(&self) -> bool {
        self.nic.is_some()
    }
}

impl Entity {
    /// Every plot owned by `nic`, ordered by id.
    pub fn find_by_farmer(nic: &str) -> Select<Entity> {
        trace!("Building farmland query for farmer {}", nic);
        Self::find()
            .filter(Column::Nic.eq(nic))
            .order_by_asc(Column::Id)
    }

    /// Plots owned by `nic` that currently carry a crop.
    pub fn find_cropped_by_farmer(nic: &str) -> Select<Entity> {
        Self::find_by_farmer(nic).filter(Column::CropId.ne(NO_CROP))
    }

    /// Plots owned by `nic` with nothing planted.
    pub fn find_uncropped_by_farmer(nic: &str) -> Select<Entity> {
        Self::find_by_farmer(nic).filter(Column::CropId.eq(NO_CROP))
    }

    /// The plot at `location` held by `nic`, or the unowned one when `nic` is `None`.
    pub fn find_by_owner_and_location(nic: Option<&str>, location: &str) -> Select<Entity> {
        let owner = match nic {
            Some(nic) => Column::Nic.eq(nic),
            None => Column::Nic.is_null(),
        };
        Self::find()
            .filter(owner)
            .filter(Column::Location.eq(location))
    }

    /// Plots that have an owner.
    pub fn find_assigned() -> Select<Entity> {
        Self::find()
            .filter(Column::Nic.is_not_null())
            .order_by_asc(Column::Id)
    }

    /// Plots nobody owns yet.
    pub fn find_unassigned() -> Select<Entity> {
        Self::find()
            .filter(Column::Nic.is_null())
            .order_by_asc(Column::Id)
    }
}
