//! Sample data fixtures for testing.
//!
//! This module provides ready-made records for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // voter-records = { path = "../voter-records", features = ["test-fixtures"] }
//!
//! use voter_records::fixtures;
//!
//! let trajectory = fixtures::consensus_trajectory();
//! ```

use crate::{ConnectionMatrixRecord, RunMetadata, TrajectoryRecord};

/// A four-agent path graph: 0-1-2-3
pub fn path_matrix() -> ConnectionMatrixRecord {
    ConnectionMatrixRecord::new(vec![
        vec![0, 1, 0, 0],
        vec![1, 0, 1, 0],
        vec![0, 1, 0, 1],
        vec![0, 0, 1, 0],
    ])
}

/// A trajectory on the four-agent path that reaches +1 consensus at step 4.
///
/// Average opinion moves in steps of 0.5 (one of four agents flips).
pub fn consensus_trajectory() -> TrajectoryRecord {
    TrajectoryRecord {
        average_opinion: vec![0.0, 0.0, 0.5, 0.5, 1.0, 1.0, 1.0, 1.0],
        interface_density: vec![
            1.0 / 3.0,
            1.0 / 3.0,
            1.0 / 3.0,
            1.0 / 3.0,
            0.0,
            0.0,
            0.0,
            0.0,
        ],
    }
}

/// A trajectory that never leaves the mixed state.
pub fn mixed_trajectory() -> TrajectoryRecord {
    TrajectoryRecord {
        average_opinion: vec![0.0, -0.5, 0.0, 0.5, 0.0, -0.5, 0.0, 0.5, 0.0, 0.0],
        interface_density: vec![
            2.0 / 3.0,
            1.0 / 3.0,
            1.0,
            1.0 / 3.0,
            2.0 / 3.0,
            1.0 / 3.0,
            1.0,
            1.0 / 3.0,
            2.0 / 3.0,
            2.0 / 3.0,
        ],
    }
}

/// Metadata matching [`consensus_trajectory`].
pub fn consensus_metadata() -> RunMetadata {
    RunMetadata {
        agents: 4,
        iterations: 8,
        connection_probability: 0.5,
        seed: Some(42),
        edge_count: 3,
        isolated_agents: 0,
        final_average_opinion: Some(1.0),
        final_interface_density: Some(0.0),
        consensus_reached: true,
    }
}
