//! Output Generation
//!
//! Persistence of finished runs.

pub mod artifacts;

pub use artifacts::*;
