//! Configuration System
//!
//! Loads run parameters from voter.toml so they can be adjusted without
//! recompiling. Command-line flags override anything loaded here.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::engine::SimulationParams;
use crate::error::SimError;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "voter.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub simulation: SimulationParams,
    pub output: OutputConfig,
}

/// Where and what to persist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub save_connection_matrix: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data"),
            save_connection_matrix: true,
        }
    }
}

impl SimConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default path, or use defaults if not found
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Self::load_or_default_from(DEFAULT_CONFIG_PATH)
    }

    /// Like `load`, but a missing file yields the defaults.
    ///
    /// A file that exists but does not parse or validate is still an error.
    pub fn load_or_default_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                warn!("{} not found. Using defaults.", path.display());
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;
        Ok(())
    }
}

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid value: {0}")]
    Invalid(#[from] SimError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.simulation.agents, 100);
        assert_eq!(config.simulation.iterations, 10_000);
        assert_eq!(config.simulation.connection_probability, 0.05);
        assert_eq!(config.output.directory, PathBuf::from("data"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SimConfig::from_toml(
            r#"
            [simulation]
            agents = 250
            connection_probability = 0.1
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.agents, 250);
        assert_eq!(config.simulation.connection_probability, 0.1);
        assert_eq!(config.simulation.iterations, 10_000);
        assert!(config.output.save_connection_matrix);
    }

    #[test]
    fn test_negative_iterations_rejected() {
        let result = SimConfig::from_toml("[simulation]\niterations = -5\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let result = SimConfig::from_toml("[simulation]\nconnection_probability = 1.5\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SimConfig::load_or_default_from(dir.path().join("voter.toml")).unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_invalid_file_is_not_replaced_by_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("voter.toml");

        fs::write(&path, "[simulation]\nconnection_probability = 1.5\n").unwrap();
        assert!(matches!(
            SimConfig::load_or_default_from(&path),
            Err(ConfigError::Invalid(SimError::InvalidParameter { .. }))
        ));

        fs::write(&path, "[simulation\nagents = 10\n").unwrap();
        assert!(matches!(
            SimConfig::load_or_default_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = SimConfig::default();
        config.simulation.seed = Some(7);
        config.output.directory = PathBuf::from("runs/p005");

        let text = config.to_toml().unwrap();
        assert_eq!(SimConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_entropy_seed_round_trip() {
        let mut config = SimConfig::default();
        config.simulation.seed = None;

        let text = config.to_toml().unwrap();
        assert!(text.contains("seed = \"entropy\""));
        assert_eq!(SimConfig::from_toml(&text).unwrap().simulation.seed, None);
    }

    #[test]
    fn test_seed_keys() {
        let missing = SimConfig::from_toml("[simulation]\nagents = 5\n").unwrap();
        assert_eq!(missing.simulation.seed, Some(42));

        let fixed = SimConfig::from_toml("[simulation]\nseed = 9\n").unwrap();
        assert_eq!(fixed.simulation.seed, Some(9));

        let unknown = SimConfig::from_toml("[simulation]\nseed = \"random\"\n");
        assert!(matches!(unknown, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_file() {
        // Only exercised when a voter.toml sits next to the crate
        if Path::new(DEFAULT_CONFIG_PATH).exists() {
            let config = SimConfig::load(DEFAULT_CONFIG_PATH).unwrap();
            assert!(config.simulation.agents > 0);
        }
    }
}
