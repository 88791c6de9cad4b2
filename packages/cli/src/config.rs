use std::env;
use std::num::ParseIntError;
use thiserror::Error;

use todoapp_config::constants::{
    DATABASE_MAX_CONNECTIONS, DATABASE_URL, DEFAULT_HOST, DEFAULT_MAX_CONNECTIONS, DEFAULT_PORT,
    PORT, TODOAPP_HOST,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("DATABASE_URL environment variable is not set")]
    MissingDatabaseUrl,
    #[error("Invalid port number: {0}")]
    InvalidPort(#[source] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid max connections: {0}")]
    InvalidMaxConnections(#[source] ParseIntError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var(DATABASE_URL)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let host = env::var(TODOAPP_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var(PORT) {
            Ok(port_str) => port_str.parse::<u16>().map_err(ConfigError::InvalidPort)?,
            Err(_) => DEFAULT_PORT,
        };

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let max_connections = match env::var(DATABASE_MAX_CONNECTIONS) {
            Ok(value) => value
                .parse::<u32>()
                .map_err(ConfigError::InvalidMaxConnections)?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Config {
            database_url,
            host,
            port,
            max_connections,
        })
    }

    /// Apply command line overrides on top of the environment.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}
