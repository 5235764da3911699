//! geneinfo-common — Shared types, errors, and the sandboxed HTTP client used across all GeneInfo crates.

pub mod error;
pub mod entities;
pub mod sandbox;

// Re-export commonly used types
pub use entities::{GeneRecord, Language, Organism, OrganismInfo, NOT_AVAILABLE, NOT_AVAILABLE_TEXT};
pub use error::{GeneInfoError, Result};
