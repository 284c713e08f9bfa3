//! Artifact Storage
//!
//! Writes and reads the per-run JSON artifacts in an output directory.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{ArtifactKind, ConnectionMatrixRecord, RunMetadata, TrajectoryRecord};

/// Errors that can occur while storing or loading artifacts.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("series length mismatch: {average_opinion} average opinion entries, {interface_density} interface density entries")]
    LengthMismatch {
        average_opinion: usize,
        interface_density: usize,
    },
}

/// Writes the artifacts of one run into an output directory.
pub struct ArtifactWriter {
    output_dir: PathBuf,
    connection_probability: f64,
    files_written: Vec<PathBuf>,
}

impl ArtifactWriter {
    /// Creates a writer for runs at connection probability `p`.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(output_dir: &Path, p: f64) -> Result<Self, StoreError> {
        fs::create_dir_all(output_dir).map_err(|source| StoreError::Io {
            path: output_dir.to_path_buf(),
            source,
        })?;

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            connection_probability: p,
            files_written: Vec::new(),
        })
    }

    /// Path an artifact of `kind` is written to
    pub fn path_for(&self, kind: ArtifactKind) -> PathBuf {
        self.output_dir
            .join(kind.file_name(self.connection_probability))
    }

    /// Writes both observable series as separate artifacts.
    pub fn write_trajectory(&mut self, trajectory: &TrajectoryRecord) -> Result<(), StoreError> {
        if !trajectory.is_aligned() {
            return Err(StoreError::LengthMismatch {
                average_opinion: trajectory.average_opinion.len(),
                interface_density: trajectory.interface_density.len(),
            });
        }
        self.write(ArtifactKind::AverageOpinion, &trajectory.average_opinion)?;
        self.write(ArtifactKind::InterfaceDensity, &trajectory.interface_density)
    }

    pub fn write_connection_matrix(
        &mut self,
        matrix: &ConnectionMatrixRecord,
    ) -> Result<(), StoreError> {
        self.write(ArtifactKind::ConnectionMatrix, matrix)
    }

    pub fn write_metadata(&mut self, metadata: &RunMetadata) -> Result<(), StoreError> {
        self.write(ArtifactKind::RunMetadata, metadata)
    }

    /// Paths written so far, in write order
    pub fn files_written(&self) -> &[PathBuf] {
        &self.files_written
    }

    fn write<T: Serialize + ?Sized>(
        &mut self,
        kind: ArtifactKind,
        value: &T,
    ) -> Result<(), StoreError> {
        let path = self.path_for(kind);
        let io_err = |source| StoreError::Io {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        writer.flush().map_err(io_err)?;

        self.files_written.push(path);
        Ok(())
    }
}

/// Reads artifacts previously written by an [`ArtifactWriter`].
pub struct ArtifactReader {
    input_dir: PathBuf,
    connection_probability: f64,
}

impl ArtifactReader {
    pub fn new(input_dir: &Path, p: f64) -> Self {
        Self {
            input_dir: input_dir.to_path_buf(),
            connection_probability: p,
        }
    }

    pub fn path_for(&self, kind: ArtifactKind) -> PathBuf {
        self.input_dir
            .join(kind.file_name(self.connection_probability))
    }

    /// Loads both observable series.
    pub fn read_trajectory(&self) -> Result<TrajectoryRecord, StoreError> {
        let average_opinion: Vec<f64> = self.read(ArtifactKind::AverageOpinion)?;
        let interface_density: Vec<f64> = self.read(ArtifactKind::InterfaceDensity)?;

        if average_opinion.len() != interface_density.len() {
            return Err(StoreError::LengthMismatch {
                average_opinion: average_opinion.len(),
                interface_density: interface_density.len(),
            });
        }

        Ok(TrajectoryRecord {
            average_opinion,
            interface_density,
        })
    }

    pub fn read_connection_matrix(&self) -> Result<ConnectionMatrixRecord, StoreError> {
        self.read(ArtifactKind::ConnectionMatrix)
    }

    pub fn read_metadata(&self) -> Result<RunMetadata, StoreError> {
        self.read(ArtifactKind::RunMetadata)
    }

    fn read<T: DeserializeOwned>(&self, kind: ArtifactKind) -> Result<T, StoreError> {
        let path = self.path_for(kind);
        let file = File::open(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|source| StoreError::Json { path, source })
    }
}
