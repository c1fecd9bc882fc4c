use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Farmers::Table)
                    .if_not_exists()
                    .col(string_len(Farmers::Nic, 20).primary_key())
                    .col(string(Farmers::Name))
                    .col(string_null(Farmers::Phone))
                    .col(string_null(Farmers::Address))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Farmers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Farmers {
    Table,
    Nic,
    Name,
    Phone,
    Address,
}
