//! Seed the bootstrap administrator so a fresh database can log in.
//!
//! The row is inserted without an explicit id so the sequence stays in step.
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;
use tracing::warn;

pub const BOOTSTRAP_EMAIL: &str = "administrator@test.com";
pub const BOOTSTRAP_PASSWORD: &str = "123456";
pub const BOOTSTRAP_PROFILE: &str = "Adm";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let hash = common::crypto::hash_password(BOOTSTRAP_PASSWORD)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        let mut insert = Query::insert();
        insert
            .into_table(Administrator::Table)
            .columns([Administrator::Email, Administrator::Password, Administrator::Profile]);
        insert
            .values([BOOTSTRAP_EMAIL.into(), hash.into(), BOOTSTRAP_PROFILE.into()])
            .map_err(|e| DbErr::Custom(e.to_string()))?;
        manager.exec_stmt(insert).await?;

        warn!(email = BOOTSTRAP_EMAIL, "bootstrap administrator seeded with the default password; change it");
        Ok(())
    }

    /// Remove only the seeded row: the lowest id carrying the bootstrap email.
    /// Later administrators that reuse the email are left alone.
    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let select = Query::select()
            .column(Administrator::Id)
            .from(Administrator::Table)
            .and_where(Expr::col(Administrator::Email).eq(BOOTSTRAP_EMAIL))
            .order_by(Administrator::Id, Order::Asc)
            .limit(1)
            .to_owned();
        let Some(row) = db.query_one(db.get_database_backend().build(&select)).await? else {
            return Ok(());
        };
        let id: i32 = row.try_get("", "id")?;

        let delete = Query::delete()
            .from_table(Administrator::Table)
            .and_where(Expr::col(Administrator::Id).eq(id))
            .to_owned();
        manager.exec_stmt(delete).await
    }
}

#[derive(DeriveIden)]
enum Administrator { Table, Id, Email, Password, Profile }
