//! Entrez query grammar for gene searches.

use geneinfo_common::Organism;

/// Build the esearch term for a gene symbol restricted to one organism.
///
/// `search_term("BRCA1", Organism::HomoSapiens)` → `BRCA1[Gene Name] AND Homo sapiens[Organism]`
pub fn search_term(symbol: &str, organism: Organism) -> String {
    format!("{}[Gene Name] AND {}[Organism]", symbol.trim(), organism.scientific_name())
}
