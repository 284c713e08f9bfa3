//! Run Metadata
//!
//! Parameters and headline results of a single run, written alongside the
//! observable series.

use serde::{Deserialize, Serialize};

/// Description of a completed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub agents: usize,
    pub iterations: usize,
    pub connection_probability: f64,
    #[serde(default)]
    pub seed: Option<u64>,
    /// Undirected edge count of the generated graph
    pub edge_count: usize,
    #[serde(default)]
    pub isolated_agents: usize,
    #[serde(default)]
    pub final_average_opinion: Option<f64>,
    #[serde(default)]
    pub final_interface_density: Option<f64>,
    #[serde(default)]
    pub consensus_reached: bool,
}
