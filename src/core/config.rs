//! Server configuration
//!
//! All settings come from environment variables with defaults:
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | HTTP_PORT | 3000 | HTTP API port |
//! | STORAGE_BACKEND | surreal | `surreal` or `memory` |
//! | DATA_DIR | ./data | RocksDB directory (persistent backend) |
//! | ADMIN_TOKEN | unset | admin bearer token; unset disables auth |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | LOG_LEVEL | info | default tracing level (RUST_LOG overrides) |
//!
//! The storage backend is chosen once here at startup; the constructed
//! repository is then passed explicitly to whatever consumes it.

/// Storage backend selection, fixed for the process lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Fixture-seeded process-lifetime arrays
    Memory,
    /// Embedded SurrealDB document store
    Persistent,
}

impl StorageBackend {
    fn from_env() -> Self {
        match std::env::var("STORAGE_BACKEND").as_deref() {
            Ok("memory") => StorageBackend::Memory,
            _ => StorageBackend::Persistent,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Storage backend in effect for this process
    pub storage: StorageBackend,
    /// Directory for the persistent store
    pub data_dir: String,
    /// Admin bearer token; `None` disables the admin check (development)
    pub admin_token: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Default log level when RUST_LOG is unset
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            storage: StorageBackend::from_env(),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            admin_token: std::env::var("ADMIN_TOKEN").ok().filter(|t| !t.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
