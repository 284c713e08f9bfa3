//! Run Artifacts
//!
//! Writes the observable series, the connection matrix and the run metadata
//! of a simulation, keyed by its connection probability.

use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::info;
use voter_records::{ArtifactReader, ArtifactWriter, StoreError};

use crate::config::OutputConfig;
use crate::engine::Simulation;
use crate::error::SimError;
use crate::graph::AdjacencyMatrix;

/// Errors raised while saving or restoring a run
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("stored connection matrix is invalid: {0}")]
    Matrix(#[from] SimError),
}

/// Writes every artifact of `simulation` into `config.directory`.
///
/// Returns the paths written, in write order.
pub fn save_run<R: Rng>(
    simulation: &Simulation<R>,
    config: &OutputConfig,
) -> Result<Vec<PathBuf>, OutputError> {
    let p = simulation.params().connection_probability;
    let mut writer = ArtifactWriter::new(&config.directory, p)?;

    writer.write_trajectory(simulation.trajectory())?;
    if config.save_connection_matrix {
        writer.write_connection_matrix(&simulation.graph().to_record())?;
    }
    writer.write_metadata(&simulation.metadata())?;

    for path in writer.files_written() {
        info!("Wrote {}", path.display());
    }
    Ok(writer.files_written().to_vec())
}

/// Restores the graph of a saved run.
pub fn load_graph(dir: &Path, p: f64) -> Result<AdjacencyMatrix, OutputError> {
    let record = ArtifactReader::new(dir, p).read_connection_matrix()?;
    Ok(AdjacencyMatrix::from_record(&record)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SimulationParams;
    use tempfile::tempdir;

    #[test]
    fn test_save_run_writes_all_artifacts() {
        let dir = tempdir().unwrap();
        let config = OutputConfig {
            directory: dir.path().join("data"),
            save_connection_matrix: true,
        };

        let params = SimulationParams::new(20, 100, 0.5).with_seed(5);
        let mut sim = Simulation::from_params(params).unwrap();
        sim.run().unwrap();

        let written = save_run(&sim, &config).unwrap();
        assert_eq!(written.len(), 4);
        for name in [
            "avg_opinion_p=0.5.json",
            "int_density_p=0.5.json",
            "connection_matrix_p=0.5.json",
            "run_metadata_p=0.5.json",
        ] {
            assert!(config.directory.join(name).is_file(), "missing {}", name);
        }

        let reader = ArtifactReader::new(&config.directory, 0.5);
        assert_eq!(&reader.read_trajectory().unwrap(), sim.trajectory());
        assert_eq!(reader.read_metadata().unwrap(), sim.metadata());
        assert_eq!(&load_graph(&config.directory, 0.5).unwrap(), sim.graph());
    }

    #[test]
    fn test_matrix_can_be_skipped() {
        let dir = tempdir().unwrap();
        let config = OutputConfig {
            directory: dir.path().to_path_buf(),
            save_connection_matrix: false,
        };

        let params = SimulationParams::new(10, 10, 1.0).with_seed(1);
        let mut sim = Simulation::from_params(params).unwrap();
        sim.run().unwrap();

        let written = save_run(&sim, &config).unwrap();
        assert_eq!(written.len(), 3);
        assert!(!dir.path().join("connection_matrix_p=1.json").exists());
        assert!(matches!(
            load_graph(dir.path(), 1.0),
            Err(OutputError::Store(StoreError::Io { .. }))
        ));
    }
}
