//! CLI argument definitions for `surveyhub`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use survey_hub::config::ConfigOverrides;
use survey_hub::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
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
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `site_dir`)
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
    /// List the course catalog.
    ///
    /// Filters by category and a case-insensitive search over titles and descriptions.
    Courses {
        /// Category: "all", a label such as "Module Two", or a slug such as `module-two`
        #[arg(short, long, value_name = "NAME", default_value = "all")]
        category: String,

        /// Search term matched against course titles and descriptions
        #[arg(short, long, value_name = "TERM", default_value = "")]
        search: String,

        /// Output format: text, markdown (md), or html
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,

        /// Output file path (defaults to stdout for text, config `export_dir` otherwise)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Show one course page.
    ///
    /// Displays the course header, tabs, week selector, schedule table, and
    /// optionally the detail panel of one lesson.
    Course {
        /// Course id (e.g., `survey-instruments`)
        #[arg(value_name = "ID")]
        id: String,

        /// Active tab: schedule, instruments, or assessment
        #[arg(short, long, value_name = "TAB", default_value = "schedule")]
        tab: String,

        /// Active week button: "all" or a week number
        #[arg(short, long, value_name = "WEEK", default_value = "all")]
        week: String,

        /// Lesson number to open in the detail panel
        #[arg(short, long, value_name = "N")]
        lesson: Option<u32>,

        /// Output format: text, markdown (md), or html
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,

        /// Output file path (defaults to stdout for text, config `export_dir` otherwise)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Build the static HTML site.
    ///
    /// Writes the catalog, every course page, and every lesson detail page.
    Site {
        /// Output directory (defaults to config `site_dir`)
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "surveyhub",
    about = "Surveying Education Hub command-line interface",
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

    /// Override config site directory
    #[arg(long = "site-dir", value_name = "DIR")]
    pub site_dir: Option<PathBuf>,

    /// Override config export directory
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            site_dir: self
                .site_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            export_dir: self
                .export_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = Cli::parse_from(["surveyhub", "config"]);

        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.site_dir.is_none());
        assert!(overrides.export_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli::parse_from([
            "surveyhub",
            "--config-level",
            "debug",
            "--config-log-file",
            "/tmp/test.log",
            "--config-verbose",
            "true",
            "--site-dir",
            "/srv/site",
            "--export-dir",
            "/tmp/exports",
            "site",
        ]);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.site_dir, Some("/srv/site".to_string()));
        assert_eq!(overrides.export_dir, Some("/tmp/exports".to_string()));
    }

    #[test]
    fn test_course_defaults() {
        let cli = Cli::parse_from(["surveyhub", "course", "gis", "--lesson", "3"]);
        match cli.command {
            Command::Course {
                id,
                tab,
                week,
                lesson,
                format,
                output,
            } => {
                assert_eq!(id, "gis");
                assert_eq!(tab, "schedule");
                assert_eq!(week, "all");
                assert_eq!(lesson, Some(3));
                assert_eq!(format, "text");
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_courses_filters() {
        let cli = Cli::parse_from(["surveyhub", "courses", "-c", "module-four", "-s", "GIS"]);
        assert!(matches!(
            cli.command,
            Command::Courses { ref category, ref search, .. }
                if category == "module-four" && search == "GIS"
        ));
    }
}
