//! Voter model simulation core: random graphs, opinions, the interaction
//! rule, and the observables recorded each step.
//!
//! Randomness is always passed in explicitly, so a seeded generator makes a
//! run fully reproducible.

pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod interaction;
pub mod observables;
pub mod opinion;
pub mod output;

pub use config::{ConfigError, OutputConfig, SimConfig};
pub use engine::{run, Observation, Simulation, SimulationParams, Trajectory};
pub use error::{SimError, SimResult};
pub use graph::AdjacencyMatrix;
pub use interaction::{step, Interaction};
pub use observables::{average_opinion, interface_density};
pub use opinion::{Opinion, OpinionState};
pub use output::{load_graph, save_run, OutputError};
