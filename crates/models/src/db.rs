use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::info;

pub const IN_MEMORY_SQLITE: &str = "sqlite::memory:";

/// Each pooled connection to an in-memory SQLite URL opens its own empty database.
fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

/// Open a pooled connection using the pool limits and timeouts from `cfg`.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    if is_sqlite_memory(&cfg.url) {
        opt.max_connections(1).min_connections(1);
    }

    let db = Database::connect(opt).await?;
    info!(backend = ?db.get_database_backend(), max_connections = cfg.max_connections, "database connected");
    Ok(db)
}

/// Connect to a private in-memory SQLite database. Used by tests across the workspace.
pub async fn connect_in_memory() -> Result<DatabaseConnection, DbErr> {
    let cfg = DatabaseConfig { url: IN_MEMORY_SQLITE.to_string(), min_connections: 1, ..Default::default() };
    connect_with_config(&cfg).await
}
