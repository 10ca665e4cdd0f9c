//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// pocketcalc: keypad calculator with one pending operation at a time
#[derive(Parser, Debug)]
#[command(name = "pocketcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        env = "POCKETCALC_LOG_FORMAT",
        global = true
    )]
    pub log_format: LogFormat,

    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Feed a sequence of button presses and print the display
    Press(PressArgs),

    /// Interactive terminal calculator
    Tui(TuiArgs),
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Buttons to press, e.g. "12+3=" (whitespace is ignored)
    pub sequence: String,

    /// Print the display after every press
    #[arg(long)]
    pub trace: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the tui command
#[derive(Parser, Debug, Default)]
pub struct TuiArgs {
    /// Do not highlight the last pressed button
    #[arg(long)]
    pub no_highlight: bool,

    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,
}

/// Output format for `press`
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Display text only
    #[default]
    Text,
    /// Full state snapshot as JSON
    Json,
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}
