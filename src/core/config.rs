//! Configuration module for the gradebook CLI

use crate::core::analytics::DEFAULT_TOP_N;
use crate::core::models::DEFAULT_SUBJECTS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the gradebook config directory
const DIR_VARIABLE: &str = "$GRADEBOOK";

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

const fn default_sample_data() -> bool {
    true
}

/// Gradebook configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Subjects every student is graded in, in display order
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Load the sample students at startup
    #[serde(default = "default_sample_data")]
    pub sample_data: bool,
    /// Number of students listed by top-performer queries
    #[serde(default)]
    pub top_n: usize,
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            subjects: Vec::new(),
            sample_data: default_sample_data(),
            top_n: 0,
        }
    }
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Gradebook settings
    #[serde(default)]
    pub gradebook: GradebookConfig,
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
    /// Override sample data loading
    pub sample_data: Option<bool>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

impl Config {
    /// Get the `$GRADEBOOK` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gradebook`
    /// - macOS: `~/Library/Application Support/gradebook`
    /// - Windows: `%APPDATA%\gradebook`
    #[must_use]
    pub fn get_gradebook_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gradebook")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Fields that are empty (or zero for `top_n`) here and set in `defaults` are
    /// copied over, so upgrading picks up new settings without touching user values.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.gradebook.subjects.is_empty() && !defaults.gradebook.subjects.is_empty() {
            self.gradebook.subjects.clone_from(&defaults.gradebook.subjects);
            changed = true;
        }
        if self.gradebook.top_n == 0 && defaults.gradebook.top_n != 0 {
            self.gradebook.top_n = defaults.gradebook.top_n;
            changed = true;
        }

        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for one run only; the configuration file is not modified.
    /// Only non-`None` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(sample_data) = overrides.sample_data {
            self.gradebook.sample_data = sample_data;
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_gradebook_dir`](Self::get_gradebook_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gradebook_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GRADEBOOK` to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_gradebook_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing sections and fields use their serde defaults. `$GRADEBOOK` is
    /// expanded in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The defaults
    /// are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create it from defaults if not found
    ///
    /// An existing file is merged with defaults (new fields are written back).
    /// On first run the config directory and file are created. Any read or parse
    /// failure falls back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory cannot be
    /// created, or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Subjects to build a gradebook with, falling back to the built-in list
    #[must_use]
    pub fn subjects(&self) -> Vec<String> {
        if self.gradebook.subjects.is_empty() {
            DEFAULT_SUBJECTS.iter().map(ToString::to_string).collect()
        } else {
            self.gradebook.subjects.clone()
        }
    }

    /// Top-N size, falling back to the built-in default when unset
    #[must_use]
    pub const fn top_n(&self) -> usize {
        if self.gradebook.top_n == 0 {
            DEFAULT_TOP_N
        } else {
            self.gradebook.top_n
        }
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `subjects` (comma separated),
    /// `sample_data`, `top_n`, `reports_dir`. Dashed spellings are accepted.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "subjects" => Some(self.gradebook.subjects.join(", ")),
            "sample_data" | "sample-data" => Some(self.gradebook.sample_data.to_string()),
            "top_n" | "top-n" => Some(self.gradebook.top_n.to_string()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                value
                    .parse::<crate::logger::Level>()
                    .map_err(|_| format!("Invalid log level: '{value}'"))?;
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "subjects" => {
                let subjects: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(ToString::to_string)
                    .collect();
                if subjects.is_empty() {
                    return Err("At least one subject is required".to_string());
                }
                self.gradebook.subjects = subjects;
            }
            "sample_data" | "sample-data" => {
                self.gradebook.sample_data = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'sample_data': '{value}'"))?;
            }
            "top_n" | "top-n" => {
                let top_n = value
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| format!("Invalid positive number for 'top_n': '{value}'"))?;
                self.gradebook.top_n = top_n;
            }
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset it to `defaults`)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "subjects" => self
                .gradebook
                .subjects
                .clone_from(&defaults.gradebook.subjects),
            "sample_data" | "sample-data" => {
                self.gradebook.sample_data = defaults.gradebook.sample_data;
            }
            "top_n" | "top-n" => self.gradebook.top_n = defaults.gradebook.top_n,
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// Succeeds without doing anything when the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[gradebook]")?;
        let subjects: Vec<String> = self
            .gradebook
            .subjects
            .iter()
            .map(|s| format!("\"{s}\""))
            .collect();
        writeln!(f, "  subjects = [{}]", subjects.join(", "))?;
        writeln!(f, "  sample_data = {}", self.gradebook.sample_data)?;
        writeln!(f, "  top_n = {}", self.gradebook.top_n)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() {
        let config = Config::from_defaults();
        assert!(!config.logging.level.is_empty());
        assert_eq!(config.subjects(), vec!["Mathematics", "English", "Science"]);
        assert_eq!(config.top_n(), 5);
        assert!(config.gradebook.sample_data);
        assert!(!config.paths.reports_dir.contains(DIR_VARIABLE));
    }

    #[test]
    fn test_missing_gradebook_section_uses_fallbacks() {
        let config = Config::from_toml("[logging]\nlevel = \"info\"\n").unwrap();
        assert!(config.gradebook.sample_data);
        assert!(config.gradebook.subjects.is_empty());
        assert_eq!(config.subjects().len(), 3);
        assert_eq!(config.top_n(), DEFAULT_TOP_N);
    }

    #[test]
    fn test_set_validates_values() {
        let mut config = Config::from_defaults();
        assert!(config.set("level", "loud").is_err());
        assert!(config.set("top_n", "0").is_err());
        assert!(config.set("top-n", "-2").is_err());
        assert!(config.set("subjects", " , ").is_err());
        assert!(config.set("sample_data", "maybe").is_err());

        config.set("level", "INFO").unwrap();
        assert_eq!(config.logging.level, "info");
        config.set("subjects", "Art, Music ,History").unwrap();
        assert_eq!(config.gradebook.subjects, vec!["Art", "Music", "History"]);
        assert_eq!(config.get("subjects").unwrap(), "Art, Music, History");
    }
}
