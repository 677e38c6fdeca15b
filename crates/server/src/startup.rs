use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::Router;
use configs::{AppConfig, LogFormat, StorageBackend};
use service::diary_entry::{
    repo::{InMemoryDiaryEntryRepository, SeaOrmDiaryEntryRepository},
    DiaryEntryRepository,
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{routes, state::AppState};

/// Initialize logging in the configured format via shared common utils
pub fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => common::utils::logging::init_logging_default(),
        LogFormat::Json => common::utils::logging::init_logging_json(),
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load config from `CONFIG_PATH` (default `config.toml`). When the file does
/// not exist, fall back to `SERVER_HOST`/`SERVER_PORT`/`DATABASE_URL`/`STORAGE_BACKEND`.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        AppConfig::load_and_validate()
    } else {
        AppConfig::from_env()
    }
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Open the configured store and wrap it in handler state.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    let repo: Arc<dyn DiaryEntryRepository> = match cfg.storage.backend {
        StorageBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            models::db::ensure_schema(&db).await?;
            info!(backend = "database", "diary store ready");
            Arc::new(SeaOrmDiaryEntryRepository::new(db))
        }
        StorageBackend::Memory => {
            warn!(backend = "memory", "diary store is in-process; entries are lost on restart");
            Arc::new(InMemoryDiaryEntryRepository::new())
        }
    };
    Ok(AppState::new(repo))
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; graceful shutdown disabled");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting diary api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
