//! Observables
//!
//! Average opinion (the order parameter) and interface density (the fraction
//! of connected pairs in disagreement).

use crate::error::{SimError, SimResult};
use crate::graph::AdjacencyMatrix;
use crate::interaction::ensure_same_population;
use crate::opinion::OpinionState;

/// Arithmetic mean of all opinions, in [-1, 1].
///
/// The sum is taken over integers, so the result is exactly ±1 at consensus
/// and never otherwise.
pub fn average_opinion(opinions: &OpinionState) -> f64 {
    let sum: i64 = opinions.as_slice().iter().map(|o| i64::from(o.value())).sum();
    sum as f64 / opinions.len() as f64
}

/// Fraction of edges whose endpoints disagree, in [0, 1].
///
/// Both numerator and denominator count ordered pairs: each undirected edge
/// contributes twice to the 1-entries of the matrix and, when its endpoints
/// disagree, twice to the disagreement count.
pub fn interface_density(opinions: &OpinionState, graph: &AdjacencyMatrix) -> SimResult<f64> {
    ensure_same_population(opinions, graph)?;

    let total = graph.entry_count();
    if total == 0 {
        return Err(SimError::EmptyGraph);
    }

    Ok(disagreements(opinions, graph) as f64 / total as f64)
}

/// Ordered pairs `(i, j)` with an edge and differing opinions
pub fn disagreements(opinions: &OpinionState, graph: &AdjacencyMatrix) -> usize {
    let values = opinions.as_slice();
    values
        .iter()
        .enumerate()
        .map(|(i, &own)| {
            graph
                .neighbors(i)
                .iter()
                .filter(|&&j| values[j] != own)
                .count()
        })
        .sum()
}
