//! Create `vehicle` table.
//! No relation to `administrator`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_len(Vehicle::Name, 150).not_null())
                    .col(string_len(Vehicle::Brand, 100).not_null())
                    .col(integer(Vehicle::Year).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vehicle::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vehicle { Table, Id, Name, Brand, Year }
