//! TUI configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file read from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "rewind_tictactoe.toml";

/// User preferences for the terminal UI.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuiConfig {
    /// Initial move-list order.
    sort_ascending: bool,

    /// Where tracing output goes; the terminal itself is owned by the UI.
    log_file: PathBuf,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            sort_ascending: true,
            log_file: PathBuf::from("rewind_tictactoe.log"),
        }
    }
}

impl TuiConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `explicit` if given, else the default file if it exists,
    /// else the built-in defaults.
    ///
    /// # Errors
    ///
    /// An explicit path that cannot be read is an error; a missing
    /// default file is not.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, descending: bool, log_file: Option<PathBuf>) -> Self {
        if descending {
            self.sort_ascending = false;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(TuiConfig::from_toml("").unwrap(), TuiConfig::default());
    }

    #[test]
    fn test_parse_fields() {
        let config = TuiConfig::from_toml(
            r#"
            sort_ascending = false
            log_file = "/tmp/ttt.log"
            "#,
        )
        .unwrap();
        assert!(!config.sort_ascending());
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = TuiConfig::from_toml("sort_ascnding = false").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = TuiConfig::load(Some(Path::new("/nonexistent/rewind.toml"))).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_overrides() {
        let config = TuiConfig::default().with_overrides(true, Some(PathBuf::from("x.log")));
        assert!(!config.sort_ascending());
        assert_eq!(config.log_file(), &PathBuf::from("x.log"));

        let untouched = TuiConfig::default().with_overrides(false, None);
        assert_eq!(untouched, TuiConfig::default());
    }
}
