use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use service::auth::TokenIssuer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Connect, migrate when configured, and wire the services into router state.
pub async fn build_state(cfg: &AppConfig) -> Result<ServerState, StartupError> {
    let tokens = TokenIssuer::from_config(&cfg.auth).map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

    let db = models::db::connect_with_config(&cfg.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Database(format!("migrations: {e}")))?;
        info!("migrations applied");
    } else {
        warn!("auto_migrate disabled; expecting schema to exist");
    }

    Ok(ServerState::new(db, tokens))
}

/// Resolves on Ctrl+C. If the signal handler cannot be installed the server
/// keeps running until killed.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received, draining connections"),
        Err(e) => {
            warn!(error = %e, "ctrl_c handler unavailable; graceful shutdown disabled");
            std::future::pending::<()>().await;
        }
    }
}

/// Build the app from a validated config and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state);

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting vehicles api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("http server drained");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refuses_to_start_without_signing_key() {
        let mut cfg = AppConfig::default();
        cfg.database.url = models::db::IN_MEMORY_SQLITE.to_string();
        let err = build_state(&cfg).await.err().expect("missing key must fail");
        assert!(matches!(err, StartupError::InvalidConfig(_)));
    }

    #[tokio::test]
    async fn run_uses_the_config_it_is_given() {
        let mut cfg = AppConfig::default();
        cfg.database.url = models::db::IN_MEMORY_SQLITE.to_string();
        cfg.server.port = 0;
        // no signing key: fails before binding instead of reloading config from disk
        let err = run(cfg).await.expect_err("missing key must fail");
        assert!(err.to_string().contains("invalid configuration"));
    }

    #[test]
    fn bind_addr_uses_server_section() {
        let cfg = AppConfig::default();
        assert_eq!(bind_addr(&cfg).unwrap().port(), 8080);
    }
}
