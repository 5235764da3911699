//! JSON endpoints.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use geneinfo_common::{GeneRecord, Organism};
use geneinfo_sources::lookup;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct GeneQuery {
    pub gene: String,
    pub organism: Option<String>,
}

/// GET /api/gene — the raw summary record for the first matching gene.
pub async fn api_gene(
    State(state): State<SharedState>,
    Query(query): Query<GeneQuery>,
) -> Result<Json<GeneRecord>, ApiError> {
    let organism = match query.organism.as_deref() {
        Some(o) => o.parse::<Organism>()?,
        None => Organism::default(),
    };
    let record = lookup(state.entrez.as_ref(), &query.gene, organism).await?;
    Ok(Json(record))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}
