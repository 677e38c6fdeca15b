#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use configs::DatabaseConfig;
use models::db::{connect_with_config, ensure_schema};

// Ensure the schema is bootstrapped only once across the entire test process
static BOOTSTRAPPED: OnceCell<()> = OnceCell::const_new();

/// Fresh connection for the current test, or `None` when no database is configured.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        return Ok(None);
    }

    let mut cfg = DatabaseConfig::default();
    cfg.normalize_from_env();
    cfg.min_connections = 1;

    BOOTSTRAPPED
        .get_or_try_init(|| async {
            let db = connect_with_config(&cfg).await?;
            ensure_schema(&db).await?;
            drop(db);
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    cfg.acquire_timeout_secs = 10;
    let db = connect_with_config(&cfg).await?;
    Ok(Some(db))
}
