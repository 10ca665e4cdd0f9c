//! pocketcalc CLI library
//!
//! Command-line front end for the pocketcalc keypad calculator: scripted
//! press sequences for pipelines and an interactive terminal keypad.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod logging;
mod runner;

pub use commands::{Cli, Commands, LogFormat, OutputFormat, PressArgs, TuiArgs};
pub use config::{CliConfig, LogStyle, Verbosity};
pub use error::{CliError, CliResult};
pub use runner::PressRunner;

use pocketcalc::tui::TuiConfig;

/// Build configuration from parsed arguments
#[must_use]
pub fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_log_style(cli.log_format.into())
}

/// Terminal options for the `tui` command
#[must_use]
pub fn tui_config(args: &TuiArgs) -> TuiConfig {
    TuiConfig::default()
        .with_highlight_keys(!args.no_highlight)
        .with_mouse(!args.no_mouse)
}
