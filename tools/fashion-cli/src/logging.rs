//! Tracing subscriber setup.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, LogFormat};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level; `verbose` forces `debug`.
/// Logs go to stderr so `--json` output on stdout stays parseable.
pub fn init_tracing(config: &LogConfig, verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let result = match config.format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| anyhow!("Failed to initialize tracing: {}", e))
}
