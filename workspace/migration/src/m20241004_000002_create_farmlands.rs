use sea_orm_migration::{prelude::*, schema::*};

use crate::m20241004_000001_create_farmers::Farmers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Farmlands::Table)
                    .if_not_exists()
                    .col(pk_auto(Farmlands::Id))
                    .col(string_len_null(Farmlands::Nic, 20))
                    // 0 marks a plot with nothing planted
                    .col(integer(Farmlands::CropId).default(0))
                    .col(string(Farmlands::Location))
                    .col(decimal_len(Farmlands::SizeAcres, 10, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_farmland_farmer")
                            .from(Farmlands::Table, Farmlands::Nic)
                            .to(Farmers::Table, Farmers::Nic)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_farmlands_nic")
                    .table(Farmlands::Table)
                    .col(Farmlands::Nic)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Farmlands::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Farmlands {
    Table,
    Id,
    Nic,
    CropId,
    Location,
    SizeAcres,
}
