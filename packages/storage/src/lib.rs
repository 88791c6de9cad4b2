// ABOUTME: Data layer and persistence primitives for the todo service
// ABOUTME: Provides the shared storage error type and SQLite pool lifecycle

pub mod pool;

pub use pool::{close_pool, connect_pool, StorageConfig};

use thiserror::Error;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Todo not found")]
    NotFound,
}

pub type StorageResult<T> = Result<T, StorageError>;
