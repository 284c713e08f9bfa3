//! Trajectory Records
//!
//! The two observable time series of a run, one entry per interaction step.

use serde::{Deserialize, Serialize};

/// Observable time series recorded by a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRecord {
    /// Average opinion after each step, in [-1, 1]
    pub average_opinion: Vec<f64>,
    /// Interface density after each step, in [0, 1]
    pub interface_density: Vec<f64>,
}

impl TrajectoryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record with room for `steps` entries per series.
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            average_opinion: Vec::with_capacity(steps),
            interface_density: Vec::with_capacity(steps),
        }
    }

    /// Appends the observables of one step.
    pub fn push(&mut self, average_opinion: f64, interface_density: f64) {
        self.average_opinion.push(average_opinion);
        self.interface_density.push(interface_density);
    }

    /// Number of recorded steps.
    ///
    /// Both series always have the same length when built through `push`.
    pub fn len(&self) -> usize {
        self.average_opinion.len()
    }

    pub fn is_empty(&self) -> bool {
        self.average_opinion.is_empty()
    }

    /// True when both series have the same number of entries
    pub fn is_aligned(&self) -> bool {
        self.average_opinion.len() == self.interface_density.len()
    }

    /// Observables of the last recorded step
    pub fn last(&self) -> Option<(f64, f64)> {
        match (self.average_opinion.last(), self.interface_density.last()) {
            (Some(&m), Some(&rho)) => Some((m, rho)),
            _ => None,
        }
    }
}
