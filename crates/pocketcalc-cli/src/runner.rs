//! Press-sequence runner

use std::fmt::Write as _;

use pocketcalc::prelude::*;

use crate::commands::{OutputFormat, PressArgs};
use crate::error::{CliError, CliResult};

/// Feeds a button sequence to a fresh calculator and renders the output
#[derive(Debug, Clone, Copy, Default)]
pub struct PressRunner {
    trace: bool,
    format: OutputFormat,
}

impl PressRunner {
    /// Create a runner printing the final display as text
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the display after every press
    #[must_use]
    pub const fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Set the output format
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Run a sequence and return everything that should go to stdout
    pub fn run(&self, sequence: &str) -> CliResult<String> {
        let tokens = parse_sequence(sequence)?;
        if tokens.is_empty() {
            return Err(CliError::invalid_argument("press sequence is empty"));
        }
        tracing::info!(presses = tokens.len(), "running press sequence");

        let mut calc = CalculatorState::new();
        let mut output = String::new();
        for token in tokens {
            calc.handle_press(token);
            if self.trace {
                let _ = writeln!(output, "{token}\t{}", calc.current_display());
            }
        }

        match self.format {
            OutputFormat::Text => {
                let _ = writeln!(output, "{}", calc.current_display());
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&calc.snapshot())?;
                let _ = writeln!(output, "{json}");
            }
        }
        Ok(output)
    }
}

impl From<&PressArgs> for PressRunner {
    fn from(args: &PressArgs) -> Self {
        Self::new()
            .with_trace(args.trace)
            .with_format(args.format)
    }
}
