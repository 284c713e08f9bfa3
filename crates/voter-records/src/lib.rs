//! Shared record types and artifact storage for the voter model workspace.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod artifact;
pub mod matrix;
pub mod metadata;
pub mod store;
pub mod trajectory;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

// Re-export artifact naming
pub use artifact::{format_probability, ArtifactKind};

// Re-export record types
pub use matrix::ConnectionMatrixRecord;
pub use metadata::RunMetadata;
pub use trajectory::TrajectoryRecord;

// Re-export storage
pub use store::{ArtifactReader, ArtifactWriter, StoreError};
