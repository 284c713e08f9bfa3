//! Configuration loading for trajectory analysis.
//!
//! Analysis settings are loaded from a TOML configuration file. Every key is
//! optional and falls back to its default.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete analysis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Trailing fraction of the run used for stationary averages, in (0, 1]
    pub tail_fraction: f64,
    /// Distance from ±1 still counted as consensus
    pub consensus_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tail_fraction: 0.1,
            consensus_tolerance: 1e-12,
        }
    }
}

impl AnalysisConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Returns this configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tail_fraction > 0.0 && self.tail_fraction <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "tail_fraction must be in (0, 1], got {}",
                self.tail_fraction
            )));
        }
        if !(self.consensus_tolerance >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "consensus_tolerance must be non-negative, got {}",
                self.consensus_tolerance
            )));
        }
        Ok(())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("invalid analysis config: {0}")]
    Invalid(String),
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Analysis Configuration

# Trailing fraction of the run averaged for stationary statistics
tail_fraction = 0.1

# Distance from +/-1 still counted as consensus
consensus_tolerance = 1e-12
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toml_matches_default() {
        let parsed = AnalysisConfig::from_toml(&default_config_toml()).unwrap();
        assert_eq!(parsed, AnalysisConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = AnalysisConfig::from_toml("tail_fraction = 0.5").unwrap();
        assert_eq!(config.tail_fraction, 0.5);
        assert_eq!(config.consensus_tolerance, 1e-12);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            AnalysisConfig::from_toml("tail_fraction = 0.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_toml("tail_fraction = 1.5"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_toml("consensus_tolerance = -1.0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AnalysisConfig::from_toml("tail_fraction = \"half\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_round_trip() {
        let config = AnalysisConfig {
            tail_fraction: 0.25,
            consensus_tolerance: 0.0,
        };
        let text = config.to_toml().unwrap();
        assert_eq!(AnalysisConfig::from_toml(&text).unwrap(), config);
    }
}
