//! geneinfo-report — Downloadable gene reports.
//! - Fixed-layout text block (identity, description, function)
//! - Single-page PDF serialisation

pub mod pdf;
pub mod text;

use serde::{Deserialize, Serialize};

pub use pdf::{export, export_pdf};
pub use text::report_text;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Substitute the on-screen placeholders for missing fields.
    /// Off by default: missing fields are written as empty values.
    #[serde(default)]
    pub fill_missing: bool,
}

/// Download file name for a gene symbol, e.g. `BRCA1_Gene_Report.pdf`.
pub fn report_filename(symbol: &str) -> String {
    let safe: String = symbol
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    let safe = if safe.is_empty() { "gene".to_string() } else { safe };
    format!("{}_Gene_Report.pdf", safe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_filename() {
        assert_eq!(report_filename("BRCA1"), "BRCA1_Gene_Report.pdf");
        assert_eq!(report_filename(" Trp53 "), "Trp53_Gene_Report.pdf");
        assert_eq!(report_filename("a/b\"c"), "a_b_c_Gene_Report.pdf");
        assert_eq!(report_filename(""), "gene_Gene_Report.pdf");
    }
}
