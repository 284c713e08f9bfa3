//! Post-hoc analysis of saved voter model runs.
//!
//! The analyzer sits downstream of the simulation. It reads the artifacts a
//! run left on disk and reduces them to consensus and disagreement
//! statistics.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   avg_opinion_p=*.json    ┌──────────┐
//! │ voter-core │ ────────────────────────▶ │ analysis │ ──▶ TrajectorySummary
//! └────────────┘   int_density_p=*.json    └──────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`]: TOML-backed analysis settings
//! - [`summary`]: consensus detection and tail statistics

pub mod config;
pub mod summary;

pub use config::{default_config_toml, AnalysisConfig, ConfigError};
pub use summary::{consensus_step, summarize, tail_len, TrajectorySummary};

use std::path::Path;

use tracing::debug;
use voter_records::{ArtifactReader, StoreError, TrajectoryRecord};

/// Errors that can occur in analysis operations.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("trajectory has no recorded steps")]
    EmptyTrajectory,
    #[error("series length mismatch: {average_opinion} average opinion entries, {interface_density} interface density entries")]
    LengthMismatch {
        average_opinion: usize,
        interface_density: usize,
    },
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("could not load artifacts: {0}")]
    Store(#[from] StoreError),
}

/// Summarizes trajectories with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    /// Creates an analyzer, rejecting an invalid configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates an analyzer from a TOML configuration file.
    pub fn from_config_file(path: &Path) -> Result<Self, AnalysisError> {
        Self::new(AnalysisConfig::from_file(path)?)
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Summarizes an in-memory trajectory.
    pub fn analyze(&self, record: &TrajectoryRecord) -> Result<TrajectorySummary, AnalysisError> {
        summarize(record, &self.config)
    }

    /// Loads the trajectory saved in `dir` for connection probability `p`
    /// and summarizes it.
    pub fn analyze_dir(&self, dir: &Path, p: f64) -> Result<TrajectorySummary, AnalysisError> {
        let record = ArtifactReader::new(dir, p).read_trajectory()?;
        debug!(steps = record.len(), p, "loaded trajectory");
        self.analyze(&record)
    }
}
