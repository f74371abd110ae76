//! Logging initialisation.
//!
//! All output goes to stderr so that interactive shells keep stdout for
//! their own rendering. `RUST_LOG` wins over the configured level.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// The filter directive that applies when `RUST_LOG` is not set.
#[must_use]
pub fn effective_directive(cfg: &LoggingConfig, default_level: &str) -> String {
    cfg.level.as_deref().unwrap_or(default_level).to_owned()
}

fn directive_filter(cfg: &LoggingConfig, default_level: &str) -> Result<EnvFilter> {
    let directive = effective_directive(cfg, default_level);
    EnvFilter::try_new(directive)
        .context("invalid logging level directive")
}

/// Install the global `tracing` subscriber.
///
/// # Errors
/// Returns an error if the configured directive is invalid or a global
/// subscriber has already been installed.
pub fn init_logging(cfg: &LoggingConfig, default_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => directive_filter(cfg, default_level)?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match cfg.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install tracing subscriber")
}
