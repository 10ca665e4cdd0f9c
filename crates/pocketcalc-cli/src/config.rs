//! CLI configuration

use serde::{Deserialize, Serialize};

use crate::commands::LogFormat;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and errors
    #[default]
    Normal,
    /// Verbose - lifecycle events
    Verbose,
    /// Debug - every button press
    Debug,
}

impl Verbosity {
    /// Map `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Default tracing filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogStyle {
    /// Human-readable lines
    #[default]
    Pretty,
    /// Newline-delimited JSON
    Json,
}

impl From<LogFormat> for LogStyle {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Json => Self::Json,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Log output format
    pub log_style: LogStyle,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set log output format
    #[must_use]
    pub const fn with_log_style(mut self, log_style: LogStyle) -> Self {
        self.log_style = log_style;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod verbosity_tests {
        use super::*;

        #[test]
        fn test_default() {
            assert_eq!(Verbosity::default(), Verbosity::Normal);
        }

        #[test]
        fn test_from_flags() {
            assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
            assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
            assert_eq!(Verbosity::from_flags(false, 2), Verbosity::Debug);
            assert_eq!(Verbosity::from_flags(false, 7), Verbosity::Debug);
        }

        #[test]
        fn test_quiet_wins() {
            assert_eq!(Verbosity::from_flags(true, 2), Verbosity::Quiet);
            assert!(Verbosity::Quiet.is_quiet());
            assert!(!Verbosity::Quiet.is_verbose());
        }

        #[test]
        fn test_is_verbose() {
            assert!(!Verbosity::Normal.is_verbose());
            assert!(Verbosity::Verbose.is_verbose());
            assert!(Verbosity::Debug.is_verbose());
        }

        #[test]
        fn test_filter_directive() {
            assert_eq!(Verbosity::Quiet.filter_directive(), "error");
            assert_eq!(Verbosity::Normal.filter_directive(), "warn");
            assert_eq!(Verbosity::Verbose.filter_directive(), "info");
            assert_eq!(Verbosity::Debug.filter_directive(), "debug");
        }
    }

    mod cli_config_tests {
        use super::*;

        #[test]
        fn test_default() {
            let config = CliConfig::default();
            assert_eq!(config.verbosity, Verbosity::Normal);
            assert_eq!(config.log_style, LogStyle::Pretty);
        }

        #[test]
        fn test_builders() {
            let config = CliConfig::new()
                .with_verbosity(Verbosity::Debug)
                .with_log_style(LogStyle::Json);
            assert_eq!(config.verbosity, Verbosity::Debug);
            assert_eq!(config.log_style, LogStyle::Json);
        }

        #[test]
        fn test_log_style_from_format() {
            assert_eq!(LogStyle::from(LogFormat::Pretty), LogStyle::Pretty);
            assert_eq!(LogStyle::from(LogFormat::Json), LogStyle::Json);
        }

        #[test]
        fn test_serialize() {
            let config = CliConfig::new().with_log_style(LogStyle::Json);
            let json = serde_json::to_string(&config).unwrap();
            assert!(json.contains("\"log_style\":\"json\""));
            let back: CliConfig = serde_json::from_str(&json).unwrap();
            assert_eq!(back, config);
        }
    }
}
