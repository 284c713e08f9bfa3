//! Interaction Rule
//!
//! One voter-model update: a uniformly chosen agent copies the opinion of a
//! uniformly chosen neighbor. The copy is unconditional. It still happens when
//! both already agree or the whole population is at consensus.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::error::{SimError, SimResult};
use crate::graph::AdjacencyMatrix;
use crate::opinion::{Opinion, OpinionState};

/// Record of a single interaction step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interaction {
    /// Agent whose opinion was overwritten
    pub agent: usize,
    /// Neighbor whose opinion was copied
    pub neighbor: usize,
    pub previous: Opinion,
    pub adopted: Opinion,
}

impl Interaction {
    /// True when the copy flipped the agent's opinion
    pub fn changed(&self) -> bool {
        self.previous != self.adopted
    }
}

/// Checks that an opinion vector and a graph describe the same population.
pub(crate) fn ensure_same_population(
    opinions: &OpinionState,
    graph: &AdjacencyMatrix,
) -> SimResult<()> {
    if opinions.len() != graph.size() {
        return Err(SimError::invalid(
            "opinions",
            format!(
                "{} opinions for a graph of {} agents",
                opinions.len(),
                graph.size()
            ),
        ));
    }
    Ok(())
}

/// Applies one interaction step in place.
///
/// The agent is drawn from all agents, not only those with a disagreeing
/// neighbor. If the drawn agent has no neighbors the step fails with
/// [`SimError::IsolatedAgent`] and the opinions are left untouched.
pub fn step<R: Rng + ?Sized>(
    opinions: &mut OpinionState,
    graph: &AdjacencyMatrix,
    rng: &mut R,
) -> SimResult<Interaction> {
    ensure_same_population(opinions, graph)?;

    let agent = rng.gen_range(0..opinions.len());
    let neighbor = *graph
        .neighbors(agent)
        .choose(rng)
        .ok_or(SimError::IsolatedAgent { agent })?;

    let adopted = opinions.as_slice()[neighbor];
    let previous = opinions.set(agent, adopted);

    let interaction = Interaction {
        agent,
        neighbor,
        previous,
        adopted,
    };
    trace!(agent, neighbor, changed = interaction.changed(), "interaction");

    Ok(interaction)
}
