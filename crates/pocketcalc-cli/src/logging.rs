//! Tracing subscriber setup
//!
//! Logs always go to stderr so `press` output on stdout stays clean.
//! `RUST_LOG` overrides the level chosen by `-q`/`-v`.

use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, LogStyle};

/// Build the level filter for a configuration
#[must_use]
pub fn env_filter(config: &CliConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.verbosity.filter_directive()))
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed.
pub fn init(config: &CliConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.log_style {
        LogStyle::Pretty => builder.try_init().is_ok(),
        LogStyle::Json => builder.json().try_init().is_ok(),
    };

    if installed {
        tracing::debug!(verbosity = ?config.verbosity, style = ?config.log_style, "logging initialized");
    }
    installed
}
