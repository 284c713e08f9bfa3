//! Simulation Engine
//!
//! Builds the opinion state and the graph once, then applies the interaction
//! rule step by step, recording both observables after every step.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use voter_records::{RunMetadata, TrajectoryRecord};

use crate::error::{validate_agents, validate_probability, SimError, SimResult};
use crate::graph::AdjacencyMatrix;
use crate::interaction::{self, Interaction};
use crate::observables::{average_opinion, interface_density};
use crate::opinion::OpinionState;

/// Observable time series produced by a run
pub type Trajectory = TrajectoryRecord;

/// Parameters of a single run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Number of agents N
    pub agents: usize,
    /// Number of interaction steps T
    pub iterations: usize,
    /// Connection probability p per unordered pair
    pub connection_probability: f64,
    /// Seed for the random source; `None` seeds from entropy.
    /// Written as `seed = "entropy"` in TOML.
    #[serde(with = "seed_format")]
    pub seed: Option<u64>,
    /// Reject graphs with isolated agents before the first step
    pub require_connected_agents: bool,
    /// Steps between progress log lines (0 disables)
    pub progress_interval: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            agents: 100,
            iterations: 10_000,
            connection_probability: 0.05,
            seed: Some(42),
            require_connected_agents: false,
            progress_interval: 1000,
        }
    }
}

impl SimulationParams {
    pub fn new(agents: usize, iterations: usize, connection_probability: f64) -> Self {
        Self {
            agents,
            iterations,
            connection_probability,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_entropy_seed(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Checks every parameter without touching the random source.
    pub fn validate(&self) -> SimResult<()> {
        validate_agents(self.agents)?;
        validate_probability(self.connection_probability)
    }
}

/// TOML form of the seed: an integer, or the keyword `"entropy"`.
mod seed_format {
    use serde::de::{self, Unexpected};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const ENTROPY: &str = "entropy";

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SeedValue {
        Fixed(u64),
        Keyword(String),
    }

    pub fn serialize<S: Serializer>(seed: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
        match seed {
            Some(seed) => serializer.serialize_u64(*seed),
            None => serializer.serialize_str(ENTROPY),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
        match SeedValue::deserialize(deserializer)? {
            SeedValue::Fixed(seed) => Ok(Some(seed)),
            SeedValue::Keyword(word) if word == ENTROPY => Ok(None),
            SeedValue::Keyword(word) => Err(de::Error::invalid_value(
                Unexpected::Str(&word),
                &"a non-negative integer or \"entropy\"",
            )),
        }
    }
}

/// Observables recorded after one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Zero-based index of the step
    pub step: usize,
    pub interaction: Interaction,
    pub average_opinion: f64,
    pub interface_density: f64,
}

/// A single voter-model run over a fixed graph
pub struct Simulation<R: Rng = SmallRng> {
    params: SimulationParams,
    graph: AdjacencyMatrix,
    opinions: OpinionState,
    trajectory: Trajectory,
    consensus_step: Option<usize>,
    rng: R,
}

impl Simulation<SmallRng> {
    /// Creates a run seeded from `params.seed`, or from entropy when unset.
    pub fn from_params(params: SimulationParams) -> SimResult<Self> {
        let rng = match params.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self::new(params, rng)
    }
}

impl<R: Rng> Simulation<R> {
    /// Validates `params`, then draws the initial opinions and the graph
    /// from `rng`, in that order.
    pub fn new(params: SimulationParams, mut rng: R) -> SimResult<Self> {
        params.validate()?;

        let opinions = OpinionState::random(params.agents, &mut rng)?;
        let graph =
            AdjacencyMatrix::random(params.agents, params.connection_probability, &mut rng)?;

        if params.require_connected_agents {
            if let Some(&agent) = graph.isolated_agents().first() {
                return Err(SimError::IsolatedAgent { agent });
            }
        }

        debug!(
            agents = params.agents,
            positive = opinions.count_positive(),
            initial_average = average_opinion(&opinions),
            "initialized opinions"
        );

        Ok(Self {
            trajectory: Trajectory::with_capacity(params.iterations),
            params,
            graph,
            opinions,
            consensus_step: None,
            rng,
        })
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn graph(&self) -> &AdjacencyMatrix {
        &self.graph
    }

    pub fn opinions(&self) -> &OpinionState {
        &self.opinions
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Steps applied so far
    pub fn steps_taken(&self) -> usize {
        self.trajectory.len()
    }

    /// True once all `iterations` steps have been applied
    pub fn is_finished(&self) -> bool {
        self.steps_taken() >= self.params.iterations
    }

    /// First step after which the population was at consensus
    pub fn consensus_step(&self) -> Option<usize> {
        self.consensus_step
    }

    /// Applies one interaction and records the observables.
    ///
    /// On error nothing is recorded and the run should be abandoned.
    /// Stepping a finished run is an `InvalidParameter` error.
    pub fn step(&mut self) -> SimResult<Observation> {
        if self.is_finished() {
            return Err(SimError::invalid(
                "iterations",
                format!("all {} steps have already been applied", self.params.iterations),
            ));
        }
        let step = self.steps_taken();
        let interaction = interaction::step(&mut self.opinions, &self.graph, &mut self.rng)?;

        let m = average_opinion(&self.opinions);
        let rho = interface_density(&self.opinions, &self.graph)?;
        self.trajectory.push(m, rho);

        if self.consensus_step.is_none() && self.opinions.is_consensus() {
            self.consensus_step = Some(step);
            info!(step, average_opinion = m, "consensus reached");
        }

        Ok(Observation {
            step,
            interaction,
            average_opinion: m,
            interface_density: rho,
        })
    }

    /// Applies every remaining step. Stops at the first error.
    ///
    /// Consensus does not end the run early: the remaining steps still
    /// execute and record the absorbed state.
    pub fn run(&mut self) -> SimResult<&Trajectory> {
        info!(
            agents = self.params.agents,
            iterations = self.params.iterations,
            p = self.params.connection_probability,
            edges = self.graph.edge_count(),
            "starting run"
        );

        let interval = self.params.progress_interval;
        while !self.is_finished() {
            let observation = self.step()?;
            let done = observation.step + 1;
            if interval > 0 && done % interval == 0 {
                info!(
                    step = done,
                    total = self.params.iterations,
                    average_opinion = observation.average_opinion,
                    interface_density = observation.interface_density,
                    "progress"
                );
            }
        }

        info!(
            steps = self.steps_taken(),
            consensus_step = ?self.consensus_step,
            "run complete"
        );
        Ok(&self.trajectory)
    }

    /// Summary of the run so far
    pub fn metadata(&self) -> RunMetadata {
        let last = self.trajectory.last();
        RunMetadata {
            agents: self.params.agents,
            iterations: self.params.iterations,
            connection_probability: self.params.connection_probability,
            seed: self.params.seed,
            edge_count: self.graph.edge_count(),
            isolated_agents: self.graph.isolated_agents().len(),
            final_average_opinion: last.map(|(m, _)| m),
            final_interface_density: last.map(|(_, rho)| rho),
            consensus_reached: self.opinions.is_consensus(),
        }
    }

    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }
}

/// Runs `params.iterations` steps with an explicit random source.
///
/// `params.seed` is ignored; the caller owns seeding of `rng`.
pub fn run<R: Rng + ?Sized>(params: &SimulationParams, rng: &mut R) -> SimResult<Trajectory> {
    let mut simulation = Simulation::new(params.clone(), rng)?;
    simulation.run()?;
    Ok(simulation.into_trajectory())
}
