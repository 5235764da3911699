//! geneinfo-web — Web UI for GeneInfo Finder.
//! Provides:
//!   - Gene search form (symbol, organism, display language)
//!   - Result sections (basic information, description, function, protein links)
//!   - PDF report download
//!   - JSON lookup endpoint

pub mod config;
pub mod error;
pub mod handlers;
pub mod layout;
pub mod presenter;
pub mod router;
pub mod state;
pub mod view;
