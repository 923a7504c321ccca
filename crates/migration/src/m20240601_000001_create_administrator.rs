//! Create `administrator` table.
//!
//! `password` holds an Argon2 PHC string, never the plain password.
//! Email is the login key but is not unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Administrator::Table)
                    .if_not_exists()
                    .col(pk_auto(Administrator::Id))
                    .col(string_len(Administrator::Email, 255).not_null())
                    .col(string_len(Administrator::Password, 255).not_null())
                    .col(string_len(Administrator::Profile, 10).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_administrator_email")
                    .table(Administrator::Table)
                    .col(Administrator::Email)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Administrator::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Administrator { Table, Id, Email, Password, Profile }
