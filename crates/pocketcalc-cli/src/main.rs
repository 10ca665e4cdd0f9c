//! pocketcalc: keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! pocketcalc                        # Interactive keypad
//! pocketcalc press "12+3="          # Prints 15.0
//! pocketcalc press --trace "4+2+3=" # Display after every press
//! pocketcalc press -f json "6/3="   # Full state as JSON
//! ```

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use pocketcalc_cli::{
    build_config, logging, tui_config, Cli, CliResult, Commands, PressArgs, PressRunner, TuiArgs,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Build configuration from CLI args
    let config = build_config(&cli);
    logging::init(&config);

    match cli.command {
        Some(Commands::Press(args)) => run_press(&args),
        Some(Commands::Tui(args)) => run_tui(&args),
        None => run_tui(&TuiArgs::default()),
    }
}

fn run_press(args: &PressArgs) -> CliResult<()> {
    let output = PressRunner::from(args).run(&args.sequence)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn run_tui(args: &TuiArgs) -> CliResult<()> {
    let config = tui_config(args);
    tracing::info!(?config, "starting terminal calculator");
    let final_display = pocketcalc::tui::run(config)?;
    tracing::info!(display = %final_display, "terminal calculator closed");
    Ok(())
}
