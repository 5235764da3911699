//! Gene search page: form, submit, results.

use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};
use serde::Deserialize;

use geneinfo_common::{Language, Organism};

use crate::error::ApiError;
use crate::state::SharedState;
use crate::view::{analyze_gene, FormState, Outcome, PageModel};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub layout: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub gene: String,
    #[serde(default)]
    pub organism: String,
    pub lang: Option<String>,
    pub layout: Option<String>,
}

fn parse_lang(lang: Option<&str>) -> Language {
    lang.and_then(|l| l.parse().ok()).unwrap_or_default()
}

/// GET / — empty search form.
pub async fn index(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, ApiError> {
    let layout = state.layout_for(query.layout.as_deref());
    let lang = parse_lang(query.lang.as_deref());

    let page = PageModel::build(&state, layout, lang, FormState::new("", Organism::default(), lang), None).await;
    Ok(Html(page.render(&state)?))
}

/// POST /analyze — run the lookup and render the sections.
pub async fn analyze(
    State(state): State<SharedState>,
    Form(form): Form<AnalyzeForm>,
) -> Result<Html<String>, ApiError> {
    let layout = state.layout_for(form.layout.as_deref());
    let lang = parse_lang(form.lang.as_deref());

    let (organism, outcome) = match form.organism.parse::<Organism>() {
        Err(e) => (Organism::default(), Some(Outcome::Error { message: e.to_string() })),
        // Nothing to look up; show the form again.
        Ok(organism) if form.gene.trim().is_empty() => (organism, None),
        Ok(organism) => {
            let outcome = analyze_gene(&state, &form.gene, organism, lang, &layout).await;
            (organism, Some(outcome))
        }
    };

    let page = PageModel::build(&state, layout, lang, FormState::new(&form.gene, organism, lang), outcome).await;
    Ok(Html(page.render(&state)?))
}
