use tracing_subscriber::EnvFilter;

use todoapp_config::constants::{DEFAULT_LOG_FILTER, RUST_LOG};

/// Filter from `RUST_LOG`, falling back to the service default.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(RUST_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initialize tracing subscriber for structured logging.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .compact()
        .try_init();
}
