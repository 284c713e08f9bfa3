//! Simulation Errors
//!
//! Every error is fatal to the current run. Nothing is retried: a resampled
//! agent or a skipped step would bias the process.

use thiserror::Error;

/// Errors raised by the simulation core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A parameter was rejected before any simulation work began
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The interaction rule sampled an agent with no neighbors
    #[error("agent {agent} has no neighbors to copy an opinion from")]
    IsolatedAgent { agent: usize },

    /// Interface density is undefined on a graph without edges
    #[error("interface density is undefined on a graph with no edges")]
    EmptyGraph,
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the core
pub type SimResult<T> = Result<T, SimError>;

/// Validates an agent count: at least one agent is required.
pub fn validate_agents(agents: usize) -> SimResult<()> {
    if agents == 0 {
        return Err(SimError::invalid("agents", "must be at least 1"));
    }
    Ok(())
}

/// Validates a connection probability: must lie in [0, 1].
pub fn validate_probability(p: f64) -> SimResult<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(SimError::invalid(
            "connection_probability",
            format!("{} is outside [0, 1]", p),
        ));
    }
    Ok(())
}
