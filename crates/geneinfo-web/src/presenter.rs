//! Gene record → display sections.

use serde::Serialize;
use url::form_urlencoded;

use geneinfo_common::{GeneRecord, Language, Organism};
use geneinfo_translate::Localizer;

use crate::layout::{LayoutConfig, LayoutPreset};

pub const UNIPROT_SEARCH_URL: &str = "https://www.uniprot.org/uniprotkb";

#[derive(Debug, Clone, Serialize)]
pub struct Field {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub title: String,
    pub fields: Vec<Field>,
    pub text: Option<String>,
    pub link: Option<Link>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneView {
    pub symbol: String,
    pub sections: Vec<Section>,
    /// Present only when the layout allows PDF export.
    pub report_url: Option<String>,
}

/// Build the four display sections for a record.
///
/// Titles, labels, description and summary go through the localizer one
/// string at a time; identifiers are shown as returned.
pub async fn present(
    record: &GeneRecord,
    symbol: &str,
    organism: Organism,
    lang: Language,
    localizer: &Localizer,
    layout: &LayoutConfig,
) -> GeneView {
    let basic = Section {
        id: "basic",
        title: localizer.tr("Basic Information", lang).await,
        fields: vec![
            Field { label: localizer.tr("Gene Name", lang).await, value: record.name.clone() },
            Field { label: localizer.tr("Gene ID", lang).await, value: record.uid.clone() },
            Field { label: localizer.tr("Organism", lang).await, value: record.organism.scientificname.clone() },
            Field { label: localizer.tr("Chromosome", lang).await, value: record.chromosome_or_default().to_string() },
            Field { label: localizer.tr("Location", lang).await, value: record.maplocation_or_default().to_string() },
        ],
        text: None,
        link: None,
    };

    let description = Section {
        id: "description",
        title: localizer.tr("Gene Description", lang).await,
        fields: Vec::new(),
        text: Some(localizer.tr(record.description_or_default(), lang).await),
        link: None,
    };

    let function = Section {
        id: "function",
        title: localizer.tr("Biological Function", lang).await,
        fields: Vec::new(),
        text: Some(localizer.tr(record.summary_or_default(), lang).await),
        link: None,
    };

    let protein = Section {
        id: "protein",
        title: localizer.tr("Protein Information", lang).await,
        fields: Vec::new(),
        text: None,
        link: Some(Link {
            label: localizer.tr("View on UniProt", lang).await,
            href: uniprot_link(symbol),
        }),
    };

    GeneView {
        symbol: symbol.trim().to_string(),
        sections: vec![basic, description, function, protein],
        report_url: layout.enable_pdf_export.then(|| report_url(symbol, organism, layout.preset)),
    }
}

/// Static UniProt search link; nothing is fetched from it.
pub fn uniprot_link(symbol: &str) -> String {
    let query: String = form_urlencoded::byte_serialize(symbol.trim().as_bytes()).collect();
    format!("{}?query={}", UNIPROT_SEARCH_URL, query)
}

/// The download link carries the layout so `/report` sees the same export setting as the page.
pub fn report_url(symbol: &str, organism: Organism, preset: LayoutPreset) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("gene", symbol.trim())
        .append_pair("organism", organism.scientific_name())
        .append_pair("layout", preset.name())
        .finish();
    format!("/report?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> GeneRecord {
        GeneRecord::from_summary_json(&json!({
            "uid": "672",
            "name": "BRCA1",
            "organism": {"scientificname": "Homo sapiens"},
            "description": "BRCA1 DNA repair associated",
        }))
        .unwrap()
    }

    #[test]
    fn test_uniprot_link() {
        assert_eq!(uniprot_link("BRCA1"), "https://www.uniprot.org/uniprotkb?query=BRCA1");
        assert_eq!(uniprot_link("HLA A&B"), "https://www.uniprot.org/uniprotkb?query=HLA+A%26B");
    }

    #[test]
    fn test_report_url() {
        assert_eq!(
            report_url("BRCA1", Organism::HomoSapiens, LayoutPreset::Report),
            "/report?gene=BRCA1&organism=Homo+sapiens&layout=report"
        );
    }

    #[tokio::test]
    async fn test_present_four_sections_with_defaults() {
        let view = present(
            &record(),
            "BRCA1",
            Organism::HomoSapiens,
            Language::English,
            &Localizer::disabled(),
            &LayoutConfig::default(),
        )
        .await;

        let titles: Vec<&str> = view.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Basic Information", "Gene Description", "Biological Function", "Protein Information"]);

        let basic = &view.sections[0];
        assert_eq!(basic.fields[0].value, "BRCA1");
        assert_eq!(basic.fields[2].value, "Homo sapiens");
        assert_eq!(basic.fields[3].value, "not available");
        assert_eq!(view.sections[1].text.as_deref(), Some("BRCA1 DNA repair associated"));
        assert_eq!(view.sections[2].text.as_deref(), Some("Not available"));
        assert_eq!(view.report_url, None);
    }

    #[tokio::test]
    async fn test_report_url_only_with_export_layout() {
        let view = present(
            &record(),
            "BRCA1",
            Organism::HomoSapiens,
            Language::English,
            &Localizer::disabled(),
            &LayoutPreset::Report.into(),
        )
        .await;
        assert_eq!(view.report_url.as_deref(), Some("/report?gene=BRCA1&organism=Homo+sapiens&layout=report"));
    }
}
