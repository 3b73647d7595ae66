//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence over the configured `server.log_level`.
//! Production output is JSON; every other environment gets the compact
//! human-readable format.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ServerConfig;

/// Builds the filter for `config`, preferring `RUST_LOG` when set.
pub fn env_filter(config: &ServerConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let builder = fmt().with_env_filter(env_filter(config)).with_target(true);

    if config.is_production() {
        builder.json().flatten_event(true).try_init()
    } else {
        builder.compact().try_init()
    }
}
