use thiserror::Error;

use crate::config::ConfigError;
use todoapp_storage::StorageError;

/// Startup and serve failures; any of these ends the process
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not connect to the database: {0}")]
    Storage(#[from] StorageError),

    #[error("Could not start server: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for server lifecycle functions
pub type ServerResult<T> = Result<T, ServerError>;
