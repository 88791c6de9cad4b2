// ABOUTME: Environment variable name constants and built-in defaults
// ABOUTME: Centralized definitions of every setting the todo service reads at startup

// Database Configuration
pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";

// Listener Configuration
pub const TODOAPP_HOST: &str = "TODOAPP_HOST";
pub const PORT: &str = "PORT";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";
