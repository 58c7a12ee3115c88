//! CLI argument definitions for `SmartGPA`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use smart_gpa::config::ConfigOverrides;
use smart_gpa::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_file`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Summarize an academic record.
    ///
    /// Prints per-semester GPAs and the cumulative CGPA, and exports the
    /// summary table as CSV.
    Summary {
        /// Path to a record JSON file (defaults to config `data_file`)
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// CSV output path (defaults to config `exports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Skip the CSV export (print the summary only)
        #[arg(long)]
        no_csv: bool,
    },
    /// Forecast future CGPA.
    ///
    /// Computes the GPA required to reach a target CGPA, the CGPA that
    /// results from an expected GPA, and a projection from the historical
    /// per-semester average.
    Forecast {
        /// Path to a record JSON file (defaults to config `data_file`)
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// Target CGPA to solve the required GPA for
        #[arg(short, long, value_name = "CGPA")]
        target: Option<f32>,

        /// Expected GPA over the planned credits
        #[arg(short, long, value_name = "GPA")]
        expected: Option<f32>,

        /// Hypothetical future credit load (default: 15.0)
        #[arg(long, value_name = "CREDITS", default_value_t = 15.0)]
        planned_credits: f32,
    },
    /// Convert between percentages, letter grades, and grade points.
    ///
    /// A numeric VALUE is treated as a percentage; a letter (e.g., `B+`)
    /// is looked up directly.
    Grade {
        /// Percentage score (0-100) or letter grade
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Generate a record report.
    ///
    /// Creates a formatted report with the semester table, cumulative
    /// summary, and outlook.
    Report {
        /// Path to a record JSON file (defaults to config `data_file`)
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// Output file path (optional; defaults to input name with format extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// Hypothetical credit load for the outlook section (default: 15.0)
        #[arg(long, value_name = "CREDITS", default_value_t = 15.0)]
        planned_credits: f32,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "smartgpa",
    about = "SmartGPA command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config record data file
    #[arg(long = "config-data-file", value_name = "FILE")]
    pub config_data_file: Option<PathBuf>,

    /// Override config record data file (short form)
    #[arg(long = "data-file", value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Override config exports directory
    #[arg(long = "config-exports-dir", value_name = "DIR")]
    pub config_exports_dir: Option<PathBuf>,

    /// Override config exports directory (short form)
    #[arg(long = "exports-dir", value_name = "DIR")]
    pub exports_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides.
    ///
    /// Short-form flags (e.g., `--data-file`) take precedence over
    /// long-form flags (e.g., `--config-data-file`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_file: self
                .data_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_data_file
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            exports_dir: self
                .exports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_exports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_reports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_data_file: None,
            data_file: None,
            config_exports_dir: None,
            exports_dir: None,
            config_reports_dir: None,
            reports_dir: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = base_cli().to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.data_file.is_none());
        assert!(overrides.exports_dir.is_none());
        assert!(overrides.reports_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli {
            config_level: Some(LogLevelArg::Debug),
            config_log_file: Some(PathBuf::from("/tmp/test.log")),
            config_verbose: Some(true),
            data_file: Some(PathBuf::from("/records/mine.json")),
            exports_dir: Some(PathBuf::from("/exports")),
            reports_dir: Some(PathBuf::from("/reports")),
            ..base_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.data_file, Some("/records/mine.json".to_string()));
        assert_eq!(overrides.exports_dir, Some("/exports".to_string()));
        assert_eq!(overrides.reports_dir, Some("/reports".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let cli = Cli {
            config_data_file: Some(PathBuf::from("/long/record.json")),
            data_file: Some(PathBuf::from("/short/record.json")),
            config_reports_dir: Some(PathBuf::from("/long/reports")),
            reports_dir: Some(PathBuf::from("/short/reports")),
            ..base_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.data_file, Some("/short/record.json".to_string()));
        assert_eq!(overrides.reports_dir, Some("/short/reports".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let cli = Cli {
            config_data_file: Some(PathBuf::from("/long/record.json")),
            config_exports_dir: Some(PathBuf::from("/long/exports")),
            ..base_cli()
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.data_file, Some("/long/record.json".to_string()));
        assert_eq!(overrides.exports_dir, Some("/long/exports".to_string()));
    }
}
