//! geneinfo-sources — Gene lookup against NCBI Entrez.
//! - Query translation (symbol + organism → Entrez term)
//! - E-utilities client (esearch, esummary)
//! - Two-step lookup flow

pub mod entrez;
pub mod lookup;
pub mod query;

pub use entrez::{EntrezApi, EntrezClient};
pub use lookup::lookup;
pub use query::search_term;
