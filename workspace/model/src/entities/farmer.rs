use sea_orm::entity::prelude::*;

/// A registered farmer, keyed by national identity card number (NIC).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "farmers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub nic: String,
    /// Display name shown in the portal's side navigation.
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A farmer may hold several plots of land.
    #[sea_orm(has_many = "super::farmland::Entity")]
    Farmland,
}

impl Related<super::farmland::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Farmland.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
