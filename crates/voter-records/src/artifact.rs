//! Artifact Naming
//!
//! Every persisted artifact is keyed by its kind and the connection
//! probability of the run that produced it, e.g. `avg_opinion_p=0.05.json`.

use serde::{Deserialize, Serialize};

/// Extension used for all artifacts
pub const ARTIFACT_EXTENSION: &str = "json";

/// The kinds of artifact a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    AverageOpinion,
    InterfaceDensity,
    ConnectionMatrix,
    RunMetadata,
}

impl ArtifactKind {
    /// All artifact kinds, in write order
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::AverageOpinion,
        ArtifactKind::InterfaceDensity,
        ArtifactKind::ConnectionMatrix,
        ArtifactKind::RunMetadata,
    ];

    /// File stem prefix for this kind
    pub fn stem(&self) -> &'static str {
        match self {
            ArtifactKind::AverageOpinion => "avg_opinion",
            ArtifactKind::InterfaceDensity => "int_density",
            ArtifactKind::ConnectionMatrix => "connection_matrix",
            ArtifactKind::RunMetadata => "run_metadata",
        }
    }

    /// File name for this kind at connection probability `p`.
    pub fn file_name(&self, p: f64) -> String {
        format!(
            "{}_p={}.{}",
            self.stem(),
            format_probability(p),
            ARTIFACT_EXTENSION
        )
    }
}

/// Formats a probability the way it appears in artifact names.
///
/// Uses the shortest representation that round-trips, so `0.05` stays
/// `0.05` and `1.0` becomes `1`.
pub fn format_probability(p: f64) -> String {
    format!("{}", p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(
            ArtifactKind::AverageOpinion.file_name(0.05),
            "avg_opinion_p=0.05.json"
        );
        assert_eq!(
            ArtifactKind::InterfaceDensity.file_name(0.05),
            "int_density_p=0.05.json"
        );
        assert_eq!(
            ArtifactKind::ConnectionMatrix.file_name(0.5),
            "connection_matrix_p=0.5.json"
        );
        assert_eq!(
            ArtifactKind::RunMetadata.file_name(1.0),
            "run_metadata_p=1.json"
        );
    }

    #[test]
    fn test_format_probability() {
        assert_eq!(format_probability(0.0), "0");
        assert_eq!(format_probability(0.1), "0.1");
        assert_eq!(format_probability(0.125), "0.125");
    }

    #[test]
    fn test_distinct_stems() {
        let stems: std::collections::HashSet<_> =
            ArtifactKind::ALL.iter().map(|k| k.stem()).collect();
        assert_eq!(stems.len(), ArtifactKind::ALL.len());
    }
}
