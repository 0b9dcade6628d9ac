//! Tracing initialization.
//!
//! Sets up tracing-subscriber with an env filter and a fmt layer on
//! stderr, leaving stdout free for command output.

use crate::error::{Error, Result};

/// Configuration for tracing initialization.
pub struct TracingConfig {
    /// Fallback filter directive (e.g. "info", "pgconf=debug").
    /// `RUST_LOG` takes precedence when set and valid.
    pub log_level: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if `log_level` is not a valid filter directive or a
/// global subscriber was already set.
pub fn init_tracing(config: TracingConfig) -> Result<()> {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|e| {
            Error::Other(format!("invalid log level {:?}: {e}", config.log_level))
        })?,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| Error::Other(format!("failed to init tracing subscriber: {e}")))?;

    Ok(())
}
