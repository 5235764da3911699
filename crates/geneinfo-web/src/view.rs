//! The gene search page: one view parameterised by [`LayoutConfig`].

use serde::Serialize;
use tracing::warn;

use geneinfo_common::{GeneInfoError, Language, Organism};
use geneinfo_sources::lookup;

use crate::error::ApiError;
use crate::layout::LayoutConfig;
use crate::presenter::{present, GeneView};
use crate::state::AppState;

pub const NOT_FOUND_MESSAGE: &str = "Gene not found";
pub const RETRY_MESSAGE: &str = "The NCBI gene database could not be reached. Please try again.";

#[derive(Debug, Clone, Serialize)]
pub struct Labels {
    pub gene_search: String,
    pub gene_input: String,
    pub organism_select: String,
    pub analyze: String,
    pub download_report: String,
}

impl Labels {
    pub async fn localized(state: &AppState, lang: Language) -> Self {
        let l = &state.localizer;
        Self {
            gene_search: l.tr("Gene Search", lang).await,
            gene_input: l.tr("Enter Gene Name (e.g. BRCA1)", lang).await,
            organism_select: l.tr("Select Organism", lang).await,
            analyze: l.tr("Analyze Gene", lang).await,
            download_report: l.tr("Download PDF Report", lang).await,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Values echoed back into the search form.
#[derive(Debug, Clone, Serialize)]
pub struct FormState {
    pub gene: String,
    pub organisms: Vec<Choice>,
    pub languages: Vec<Choice>,
}

impl FormState {
    pub fn new(gene: &str, organism: Organism, lang: Language) -> Self {
        Self {
            gene: gene.trim().to_string(),
            organisms: Organism::ALL
                .iter()
                .map(|o| Choice { value: o.scientific_name(), label: o.scientific_name(), selected: *o == organism })
                .collect(),
            languages: Language::ALL
                .iter()
                .map(|l| Choice { value: l.code(), label: l.label(), selected: *l == lang })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Found { gene: GeneView },
    NotFound { message: String },
    Error { message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct PageModel {
    pub lang: &'static str,
    pub layout: LayoutConfig,
    pub labels: Labels,
    pub form: FormState,
    pub outcome: Option<Outcome>,
}

impl PageModel {
    pub async fn build(
        state: &AppState,
        layout: LayoutConfig,
        lang: Language,
        form: FormState,
        outcome: Option<Outcome>,
    ) -> Self {
        Self {
            lang: lang.code(),
            layout,
            labels: Labels::localized(state, lang).await,
            form,
            outcome,
        }
    }

    pub fn render(&self, state: &AppState) -> Result<String, ApiError> {
        let template = state.templates.get_template("page.html")?;
        Ok(template.render(self)?)
    }
}

/// Run one lookup and turn it into something the page can show.
///
/// Either every section renders or none does.
pub async fn analyze_gene(
    state: &AppState,
    symbol: &str,
    organism: Organism,
    lang: Language,
    layout: &LayoutConfig,
) -> Outcome {
    match lookup(state.entrez.as_ref(), symbol, organism).await {
        Ok(record) => Outcome::Found {
            gene: present(&record, symbol, organism, lang, &state.localizer, layout).await,
        },
        Err(GeneInfoError::NotFound { .. }) => Outcome::NotFound {
            message: state.localizer.tr(NOT_FOUND_MESSAGE, lang).await,
        },
        Err(GeneInfoError::InvalidInput(msg)) => Outcome::Error { message: msg },
        Err(e) => {
            warn!(error = %e, symbol, "Gene lookup failed");
            Outcome::Error {
                message: state.localizer.tr(RETRY_MESSAGE, lang).await,
            }
        }
    }
}
