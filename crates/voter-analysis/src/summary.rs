//! Trajectory summaries.
//!
//! Reduces the two observable series of a run to a handful of numbers:
//! when consensus was reached and what the tail of the run looked like.

use serde::{Deserialize, Serialize};
use voter_records::TrajectoryRecord;

use crate::config::AnalysisConfig;
use crate::AnalysisError;

/// Headline statistics of one trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySummary {
    /// Number of recorded steps
    pub steps: usize,
    pub final_average_opinion: f64,
    pub final_interface_density: f64,
    /// First step whose average opinion is ±1
    pub consensus_step: Option<usize>,
    /// Steps included in the tail averages
    pub tail_steps: usize,
    /// Mean interface density over the tail
    pub tail_mean_interface_density: f64,
    /// Mean |average opinion| over the tail
    pub tail_mean_abs_opinion: f64,
    /// Lowest interface density over the whole run
    pub min_interface_density: f64,
}

impl std::fmt::Display for TrajectorySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Steps: {}", self.steps)?;
        writeln!(f, "Final average opinion: {:.4}", self.final_average_opinion)?;
        writeln!(f, "Final interface density: {:.4}", self.final_interface_density)?;
        match self.consensus_step {
            Some(step) => writeln!(f, "Consensus reached at step {}", step)?,
            None => writeln!(f, "Consensus not reached")?,
        }
        writeln!(
            f,
            "Tail ({} steps): mean density {:.4}, mean |opinion| {:.4}",
            self.tail_steps, self.tail_mean_interface_density, self.tail_mean_abs_opinion
        )?;
        write!(f, "Minimum interface density: {:.4}", self.min_interface_density)
    }
}

/// Index of the first step at which the average opinion is within
/// `tolerance` of +1 or -1.
pub fn consensus_step(record: &TrajectoryRecord, tolerance: f64) -> Option<usize> {
    record
        .average_opinion
        .iter()
        .position(|m| (m.abs() - 1.0).abs() <= tolerance)
}

/// Number of trailing steps covered by `tail_fraction`: at least one.
pub fn tail_len(steps: usize, tail_fraction: f64) -> usize {
    let tail = (steps as f64 * tail_fraction).ceil() as usize;
    tail.clamp(1, steps.max(1))
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let n = values.len();
    values.sum::<f64>() / n as f64
}

/// Summarizes a recorded trajectory.
pub fn summarize(
    record: &TrajectoryRecord,
    config: &AnalysisConfig,
) -> Result<TrajectorySummary, AnalysisError> {
    if !record.is_aligned() {
        return Err(AnalysisError::LengthMismatch {
            average_opinion: record.average_opinion.len(),
            interface_density: record.interface_density.len(),
        });
    }
    let (final_average_opinion, final_interface_density) =
        record.last().ok_or(AnalysisError::EmptyTrajectory)?;

    let steps = record.len();
    let tail_steps = tail_len(steps, config.tail_fraction);
    let tail_start = steps - tail_steps;

    let tail_mean_interface_density =
        mean(record.interface_density[tail_start..].iter().copied());
    let tail_mean_abs_opinion = mean(record.average_opinion[tail_start..].iter().map(|m| m.abs()));
    let min_interface_density = record
        .interface_density
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);

    Ok(TrajectorySummary {
        steps,
        final_average_opinion,
        final_interface_density,
        consensus_step: consensus_step(record, config.consensus_tolerance),
        tail_steps,
        tail_mean_interface_density,
        tail_mean_abs_opinion,
        min_interface_density,
    })
}
