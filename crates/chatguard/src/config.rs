//! Configuration management for chatguard.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.
//!
//! Only additive settings are configurable. The built-in pattern table, the
//! blocked-message placeholder, and the admin exemption are fixed platform
//! policy and deliberately have no configuration knobs.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::moderation::ContactFilter;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "chatguard";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CHATGUARD_`)
/// 2. TOML config file at `~/.config/chatguard/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter configuration.
    pub filter: FilterSettings,
}

/// Filter-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Additional regex patterns checked after the built-in set.
    ///
    /// A custom match blocks with the generic "potential contact information"
    /// reason. Custom patterns can only add blocking; the built-in patterns
    /// cannot be disabled.
    pub custom_patterns: Vec<String>,
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails, or if any
    /// custom pattern is not a valid regex.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails, or if any
    /// custom pattern is not a valid regex.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("CHATGUARD_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any custom pattern fails to compile.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.filter.custom_patterns {
            if let Err(source) = regex::Regex::new(pattern) {
                return Err(Error::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                });
            }
        }
        Ok(())
    }

    /// Build a [`ContactFilter`] from this configuration.
    #[must_use]
    pub fn build_filter(&self) -> ContactFilter {
        ContactFilter::with_custom_patterns(&self.filter.custom_patterns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::moderation::Category;
    use crate::role::Role;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.filter.custom_patterns.is_empty());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_regex() {
        let mut config = Config::default();
        config.filter.custom_patterns = vec!["[invalid".to_string()];

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("[invalid"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Config::default());
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("chatguard"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_build_filter_with_custom_patterns() {
        let mut config = Config::default();
        config.filter.custom_patterns = vec![r"(?i)\btelegram\b".to_string()];

        let filter = config.build_filter();
        assert_eq!(
            filter.classify("find me on Telegram"),
            Some(Category::Obfuscated)
        );

        let verdict = filter.filter_message("find me on Telegram", Role::Student);
        assert!(!verdict.allowed);
    }

    #[test]
    fn test_build_filter_default_has_builtins() {
        let filter = Config::default().build_filter();
        assert_eq!(
            filter.classify("call me at 03001234567"),
            Some(Category::Phone)
        );
    }

    #[test]
    fn test_config_serialize_roundtrip() {
        let mut config = Config::default();
        config.filter.custom_patterns = vec![r"\bskype\b".to_string()];

        let json = serde_json::to_string(&config).unwrap();
        let restored: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn test_filter_settings_deserialize() {
        let json = r#"{"custom_patterns": ["\\bviber\\b"]}"#;
        let settings: FilterSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.custom_patterns, vec![r"\bviber\b".to_string()]);
    }
}
