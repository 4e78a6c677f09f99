//! Logging Infrastructure
//!
//! Structured logging setup. `RUST_LOG` overrides the configured level.

use tracing_subscriber::EnvFilter;

/// Initialize the logger
///
/// `default_level` applies when `RUST_LOG` is unset.
pub fn init_logger(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
