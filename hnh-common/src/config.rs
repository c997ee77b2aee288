//! Configuration loading and config file resolution
//!
//! Configuration is a small TOML file; every section is optional and falls
//! back to built-in defaults. The file is located in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`HNH_CONFIG`)
//! 3. Platform config directory (`<config_dir>/headheart/config.toml`)
//! 4. Compiled defaults (fallback)
//!
//! A missing file at tiers 2-3 is not fatal: a warning is logged and the
//! next tier is tried. A file named explicitly on the command line must exist.

use crate::models::RatingScale;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "HNH_CONFIG";

/// Top-level configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Accepted rating range, used by entry validation and the
    /// perfect-score trend metric
    #[serde(default)]
    pub ratings: RatingScale,

    /// Report display preferences
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Display preferences for rendered reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Number of perfect-harmony entries listed before "...and N more"
    #[serde(default = "default_harmony_preview")]
    pub harmony_preview: usize,

    /// Head weight (0-100) used when sorting entries by rating
    #[serde(default = "default_head_weight")]
    pub head_weight: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            harmony_preview: default_harmony_preview(),
            head_weight: default_head_weight(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_harmony_preview() -> usize {
    5
}

fn default_head_weight() -> u8 {
    50
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl TomlConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(format!("Config file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Check cross-field constraints serde cannot express
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::Config(format!(
                "Invalid log level '{}' (expected one of {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        if self.ratings.min < 1 || self.ratings.min >= self.ratings.max {
            return Err(Error::Config(format!(
                "Invalid rating scale {}..={} (need 1 <= min < max)",
                self.ratings.min, self.ratings.max
            )));
        }
        if self.display.head_weight > 100 {
            return Err(Error::Config(format!(
                "head_weight must be between 0 and 100 (got {})",
                self.display.head_weight
            )));
        }
        Ok(())
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    CommandLine(PathBuf),
    Environment(PathBuf),
    UserConfig(PathBuf),
    Defaults,
}

/// Resolves the config file following the priority order in the module docs
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    env_var: String,
    user_config: Option<PathBuf>,
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self {
            env_var: CONFIG_ENV_VAR.to_string(),
            user_config: default_config_path(),
        }
    }

    /// Override the platform config path (tests, packaging)
    pub fn with_user_config(mut self, path: Option<PathBuf>) -> Self {
        self.user_config = path;
        self
    }

    /// Override the environment variable name
    pub fn with_env_var(mut self, name: impl Into<String>) -> Self {
        self.env_var = name.into();
        self
    }

    /// Resolve and load configuration
    ///
    /// Only the command-line tier is strict about missing files. A file that
    /// exists but fails to parse is always an error.
    pub fn resolve(&self, cli_arg: Option<&Path>) -> Result<(TomlConfig, ConfigSource)> {
        // Priority 1: Command-line argument
        if let Some(path) = cli_arg {
            let config = TomlConfig::load(path)?;
            info!("Loaded config from command line: {}", path.display());
            return Ok((config, ConfigSource::CommandLine(path.to_path_buf())));
        }

        // Priority 2: Environment variable
        if let Ok(value) = std::env::var(&self.env_var) {
            let path = PathBuf::from(value);
            if path.exists() {
                let config = TomlConfig::load(&path)?;
                info!("Loaded config from ${}: {}", self.env_var, path.display());
                return Ok((config, ConfigSource::Environment(path)));
            }
            warn!(
                "${} points to missing file {}, ignoring",
                self.env_var,
                path.display()
            );
        }

        // Priority 3: Platform config directory
        if let Some(path) = &self.user_config {
            if path.exists() {
                let config = TomlConfig::load(path)?;
                info!("Loaded config from {}", path.display());
                return Ok((config, ConfigSource::UserConfig(path.clone())));
            }
            debug!("No config file at {}", path.display());
        }

        // Priority 4: Compiled defaults
        debug!("Using built-in configuration defaults");
        Ok((TomlConfig::default(), ConfigSource::Defaults))
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Platform config file path (`~/.config/headheart/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("headheart").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.ratings, RatingScale { min: 1, max: 5 });
        assert_eq!(config.display.harmony_preview, 5);
        assert_eq!(config.display.head_weight, 50);
    }

    #[test]
    fn test_partial_sections() {
        let config = TomlConfig::from_toml_str(
            r#"
            [ratings]
            max = 4

            [display]
            harmony_preview = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.ratings.min, 1);
        assert_eq!(config.ratings.max, 4);
        assert_eq!(config.display.harmony_preview, 3);
        assert_eq!(config.display.head_weight, 50);
    }

    #[test]
    fn test_rejects_inverted_scale() {
        let err = TomlConfig::from_toml_str("[ratings]\nmin = 5\nmax = 2\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_zero_min() {
        assert!(TomlConfig::from_toml_str("[ratings]\nmin = 0\n").is_err());
    }

    #[test]
    fn test_rejects_head_weight_over_100() {
        assert!(TomlConfig::from_toml_str("[display]\nhead_weight = 101\n").is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").is_err());
        assert!(TomlConfig::from_toml_str("[logging]\nlevel = \"DEBUG\"\n").is_ok());
    }

    #[test]
    fn test_malformed_toml() {
        let err = TomlConfig::from_toml_str("[ratings\nmax = ").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("headheart/config.toml"));
        }
    }
}
