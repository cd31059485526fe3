// src/logging.rs

use tracing_subscriber::EnvFilter;

/// Installs a formatted subscriber. `RUST_LOG` wins over `default_level`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_with_default(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
