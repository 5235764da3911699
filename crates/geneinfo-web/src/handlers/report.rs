//! PDF report download.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;

use geneinfo_common::Organism;
use geneinfo_report::{export, report_filename};
use geneinfo_sources::lookup;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub gene: String,
    #[serde(default)]
    pub organism: Option<String>,
    pub layout: Option<String>,
}

/// GET /report — look the gene up again and stream it as `<symbol>_Gene_Report.pdf`.
pub async fn download_report(
    State(state): State<SharedState>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.layout_for(query.layout.as_deref()).enable_pdf_export {
        return Err(ApiError::Disabled("PDF export is disabled"));
    }

    let organism = match query.organism.as_deref() {
        Some(o) => o.parse::<Organism>()?,
        None => Organism::default(),
    };

    let record = lookup(state.entrez.as_ref(), &query.gene, organism).await?;
    let pdf = export(&record, state.report)?;

    let disposition = format!("attachment; filename=\"{}\"", report_filename(&query.gene));
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    ))
}
