//! Todo service binary support: configuration, middleware, and server lifecycle.

pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod server;


pub use config::{Config, ConfigError};
pub use error::{ServerError, ServerResult};
pub use server::{build_router, run, run_until, serve, shutdown_signal};
