//! Configuration module for `SurveyHub`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the application config directory
const DIR_VARIABLE: &str = "$SURVEY_HUB";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory the static site is built into
    #[serde(default)]
    pub site_dir: String,
    /// Directory for single-page exports (Markdown/HTML)
    #[serde(default)]
    pub export_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override static site output directory
    pub site_dir: Option<String>,
    /// Override export directory
    pub export_dir: Option<String>,
}

/// Settable configuration key
///
/// Path keys accept both `snake_case` and `kebab-case` spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// `[logging] level`
    Level,
    /// `[logging] file`
    File,
    /// `[logging] verbose`
    Verbose,
    /// `[paths] site_dir`
    SiteDir,
    /// `[paths] export_dir`
    ExportDir,
}

impl ConfigKey {
    /// Keys in display order
    pub const ALL: [Self; 5] = [
        Self::Level,
        Self::File,
        Self::Verbose,
        Self::SiteDir,
        Self::ExportDir,
    ];

    /// Key name as written in the config file
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::File => "file",
            Self::Verbose => "verbose",
            Self::SiteDir => "site_dir",
            Self::ExportDir => "export_dir",
        }
    }

    /// Config file table holding the key
    #[must_use]
    pub const fn section(self) -> &'static str {
        match self {
            Self::Level | Self::File | Self::Verbose => "logging",
            Self::SiteDir | Self::ExportDir => "paths",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|key| key.name() == normalized)
            .ok_or_else(|| format!("Unknown config key: '{s}'"))
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Copy `default` into an empty `value`; reports whether anything changed
fn fill_if_empty(value: &mut String, default: &str) -> bool {
    if value.is_empty() && !default.is_empty() {
        default.clone_into(value);
        true
    } else {
        false
    }
}

impl Config {
    /// Get the `$SURVEY_HUB` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/surveyhub`
    /// - macOS: `~/Library/Application Support/surveyhub`
    /// - Windows: `%APPDATA%\surveyhub`
    #[must_use]
    pub fn get_surveyhub_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("surveyhub")
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_surveyhub_dir`](Self::get_surveyhub_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_surveyhub_dir().join(CONFIG_FILE_NAME)
    }

    /// Fill empty settings from `defaults`
    ///
    /// Settings the user already set are never touched, so an upgraded
    /// default file only adds what is new.
    ///
    /// # Returns
    ///
    /// `true` if any setting was filled
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.site_dir, &defaults.paths.site_dir),
            (&mut self.paths.export_dir, &defaults.paths.export_dir),
        ]
        .into_iter()
        .fold(false, |changed, (value, default)| {
            fill_if_empty(value, default) || changed
        })
    }

    /// Apply CLI-provided overrides for this run only
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        let text = [
            (&overrides.level, &mut self.logging.level),
            (&overrides.file, &mut self.logging.file),
            (&overrides.site_dir, &mut self.paths.site_dir),
            (&overrides.export_dir, &mut self.paths.export_dir),
        ];
        for (source, target) in text {
            if let Some(value) = source {
                target.clone_from(value);
            }
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults. `$SURVEY_HUB` is expanded in
    /// the log file and both directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        let dir = Self::get_surveyhub_dir();
        let dir = dir.to_string_lossy();
        for value in [
            &mut config.logging.file,
            &mut config.paths.site_dir,
            &mut config.paths.export_dir,
        ] {
            if value.contains(DIR_VARIABLE) {
                *value = value.replace(DIR_VARIABLE, &dir);
            }
        }

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load the user config file, creating it from defaults on first run
    ///
    /// An existing file gains any settings it lacks and is written back when
    /// that adds something. An unreadable or malformed file is left alone and
    /// the defaults are used for this run.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save();
            return defaults;
        }

        match fs::read_to_string(&config_file)
            .ok()
            .and_then(|content| Self::from_toml(&content).ok())
        {
            Some(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            }
            None => defaults,
        }
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Current value of `key`, as shown by `config get`
    #[must_use]
    pub fn value(&self, key: ConfigKey) -> String {
        match key {
            ConfigKey::Level => self.logging.level.clone(),
            ConfigKey::File => self.logging.file.clone(),
            ConfigKey::Verbose => self.logging.verbose.to_string(),
            ConfigKey::SiteDir => self.paths.site_dir.clone(),
            ConfigKey::ExportDir => self.paths.export_dir.clone(),
        }
    }

    /// Get a configuration value by key name
    ///
    /// Returns `None` for an unknown key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        key.parse().ok().map(|key| self.value(key))
    }

    /// Set a configuration value by key name
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, `level` is not a log level, or
    /// `verbose` is not a boolean.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key.parse::<ConfigKey>()? {
            ConfigKey::Level => {
                let level = value
                    .parse::<crate::logger::Level>()
                    .map_err(|_| format!("Invalid log level for 'level': '{value}'"))?;
                self.logging.level = level.to_string();
            }
            ConfigKey::Verbose => {
                self.logging.verbose = value
                    .parse()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            ConfigKey::File => value.clone_into(&mut self.logging.file),
            ConfigKey::SiteDir => value.clone_into(&mut self.paths.site_dir),
            ConfigKey::ExportDir => value.clone_into(&mut self.paths.export_dir),
        }
        Ok(())
    }

    /// Restore one value from `defaults`
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key.parse::<ConfigKey>()? {
            ConfigKey::Verbose => self.logging.verbose = defaults.logging.verbose,
            ConfigKey::Level => self.logging.level.clone_from(&defaults.logging.level),
            ConfigKey::File => self.logging.file.clone_from(&defaults.logging.file),
            ConfigKey::SiteDir => self.paths.site_dir.clone_from(&defaults.paths.site_dir),
            ConfigKey::ExportDir => self.paths.export_dir.clone_from(&defaults.paths.export_dir),
        }
        Ok(())
    }

    /// Delete the config file; the next [`load()`](Config::load) recreates it
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        match fs::remove_file(Self::get_config_file_path()) {
            Err(err) if err.kind() != std::io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut section = "";
        for key in ConfigKey::ALL {
            if key.section() != section {
                if !section.is_empty() {
                    writeln!(f)?;
                }
                section = key.section();
                writeln!(f, "[{section}]")?;
            }
            match key {
                ConfigKey::Verbose => writeln!(f, "  {key} = {}", self.value(key))?,
                _ => writeln!(f, "  {key} = \"{}\"", self.value(key))?,
            }
        }
        Ok(())
    }
}
