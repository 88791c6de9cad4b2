// ABOUTME: SQLite connection pool creation and shutdown
// ABOUTME: One pool is created at process start and shared by every request

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use todoapp_config::constants::{DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS};

use crate::{StorageError, StorageResult};

/// Pool configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout_seconds: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

/// Connect to the database named by `database_url`.
///
/// Accepts any sqlx SQLite URL (`sqlite:todos.db`, `sqlite://path/to/todos.db`,
/// `sqlite::memory:`). File databases are created when missing and switched to
/// WAL journaling. An in-memory database lives per connection, so callers that
/// need one shared in-memory database should set `max_connections` to 1.
pub async fn connect_pool(database_url: &str, config: &StorageConfig) -> StorageResult<SqlitePool> {
    if config.max_connections == 0 {
        return Err(StorageError::Database(
            "max_connections must be at least 1".to_string(),
        ));
    }

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");

    let mut options = SqliteConnectOptions::from_str(database_url)
        .map_err(StorageError::Sqlx)?
        .create_if_missing(true)
        .foreign_keys(true);

    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    debug!(
        "Connecting to database (max_connections: {}, in_memory: {})",
        config.max_connections, in_memory
    );

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
        .connect_with(options)
        .await
        .map_err(StorageError::Sqlx)?;

    info!("Database connection established");

    Ok(pool)
}

/// Close the pool, waiting for checked-out connections to be returned.
pub async fn close_pool(pool: &SqlitePool) {
    if pool.is_closed() {
        return;
    }
    pool.close().await;
    info!("Database connection pool closed");
}
