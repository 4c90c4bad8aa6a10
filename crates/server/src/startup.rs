use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Which storage the handlers run against, from `BIZTIME_STORAGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Postgres,
    Memory,
}

impl StorageKind {
    pub fn from_env() -> Self {
        match std::env::var("BIZTIME_STORAGE").as_deref() {
            Ok("memory") => Self::Memory,
            _ => Self::Postgres,
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml`, or fall back to defaults plus environment variables.
/// Expects `.env` to be loaded already.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let mut cfg = match configs::load_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(error = %e, "config file not loaded; using environment");
            AppConfig::from_env()
        }
    };
    cfg.server
        .normalize()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

/// Open storage and wire the services. PostgreSQL is migrated to the latest schema.
pub async fn build_state(cfg: &AppConfig, kind: StorageKind) -> Result<AppState, StartupError> {
    match kind {
        StorageKind::Memory => {
            warn!("using in-memory storage; data is lost on exit");
            Ok(AppState::in_memory())
        }
        StorageKind::Postgres => {
            let mut db_cfg = cfg.database.clone();
            db_cfg.normalize_from_env();
            if db_cfg.url.trim().is_empty() {
                db_cfg.url = models::db::DATABASE_URL.clone();
            }
            db_cfg
                .validate()
                .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;

            let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&db_cfg))
                .await
                .map_err(|e| StartupError::Storage(e.to_string()))?;
            models::db::test_connection(&db)
                .await
                .map_err(|e| StartupError::Storage(e.to_string()))?;
            migration::Migrator::up(&db, None)
                .await
                .map_err(|e| StartupError::Storage(format!("migrations failed: {}", e)))?;
            info!("database ready");
            Ok(AppState::from_db(db))
        }
    }
}

/// Build the application router for the given state.
pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg, StorageKind::from_env()).await?;
    let app = build_app(state);

    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address: {}", e)))?;
    info!(%addr, "starting biztime server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_file_falls_back_to_normalized_defaults() {
        std::env::set_var("CONFIG_PATH", "/nonexistent/biztime-config.toml");
        let cfg = load_config().unwrap();
        assert!(!cfg.server.host.is_empty());
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[tokio::test]
    async fn memory_state_builds_without_database() {
        let cfg = AppConfig::default();
        assert!(build_state(&cfg, StorageKind::Memory).await.is_ok());
    }

    #[tokio::test]
    async fn non_postgres_url_rejected_before_connecting() {
        let mut cfg = AppConfig::default();
        cfg.database.url = "sqlite://biztime.db".into();
        let err = build_state(&cfg, StorageKind::Postgres).await.err().unwrap();
        assert!(matches!(err, StartupError::InvalidConfig(_)));
    }
}
