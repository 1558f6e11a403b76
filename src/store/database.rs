//! Row store gateway
//!
//! Owns the sqlx pool. Repositories borrow a clone of it and hold nothing
//! else, so every operation is one independent round trip.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::cheese_repo::CheeseRepository;
use super::config::StoreConfig;
use super::errors::{StoreError, StoreResult};
use super::schema;
use super::wine_repo::WineRepository;

/// Handle to the SQLite database
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
    round_trip_timeout: Duration,
}

impl Database {
    /// Open a pool for the configured database, creating the file if needed.
    ///
    /// Foreign keys are enforced on every connection; cheese writes rely on
    /// this to reject references to wines that do not exist.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        config.validate().map_err(StoreError::InvalidConfig)?;

        let mut opts = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(config.busy_timeout());

        let mut pool_opts = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.round_trip_timeout());

        if config.is_in_memory() {
            // Closing the only connection would discard the database.
            pool_opts = pool_opts
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        } else {
            opts = opts.journal_mode(SqliteJournalMode::Wal);
        }

        let pool = pool_opts.connect_with(opts).await?;
        tracing::info!(
            database_url = %config.database_url,
            max_connections = config.max_connections,
            "connected to database"
        );

        Ok(Self {
            pool,
            round_trip_timeout: config.round_trip_timeout(),
        })
    }

    /// Connect and apply the schema
    pub async fn open(config: &StoreConfig) -> StoreResult<Self> {
        let db = Self::connect(config).await?;
        db.migrate().await?;
        Ok(db)
    }

    /// Create tables that do not exist yet
    pub async fn migrate(&self) -> StoreResult<()> {
        schema::apply(&self.pool).await?;
        tracing::debug!("schema applied");
        Ok(())
    }

    /// Check connectivity
    pub async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn wines(&self) -> WineRepository {
        WineRepository::new(self.pool.clone())
    }

    pub fn cheeses(&self) -> CheeseRepository {
        CheeseRepository::new(self.pool.clone())
    }

    /// Bound applied to each repository call by the HTTP layer
    pub fn round_trip_timeout(&self) -> Duration {
        self.round_trip_timeout
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
