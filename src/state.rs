use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::auth::credentials::{CredentialVerifier, PlaintextVerifier};
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Open the database (creating the file on first run), apply the
    /// idempotent schema migration, and assemble the shared state.
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env());

        let options = SqliteConnectOptions::from_str(&config.database_url)
            .context("parse DATABASE_URL")?
            .create_if_missing(true);
        let db = SqlitePoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await
            .context("open database")?;

        sqlx::migrate!("./migrations")
            .run(&db)
            .await
            .context("run migrations")?;
        tracing::debug!(database_url = %config.database_url, "database ready");

        Ok(Self::from_parts(db, config, Arc::new(PlaintextVerifier)))
    }

    pub fn from_parts(
        db: SqlitePool,
        config: Arc<AppConfig>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            db,
            config,
            verifier,
        }
    }
}
