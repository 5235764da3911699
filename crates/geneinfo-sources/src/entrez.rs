//! NCBI E-utilities client for the Gene database.
//!
//! Endpoints used:
//!   esearch:  https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi
//!   esummary: https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use geneinfo_common::sandbox::SandboxClient as Client;
use geneinfo_common::{GeneInfoError, GeneRecord, Result};

pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Upper bound on ids requested from esearch. Only the first is used.
const RETMAX: usize = 20;

/// The two Entrez calls a gene lookup needs.
#[async_trait]
pub trait EntrezApi: Send + Sync {
    /// Run an esearch against `db=gene`, returning identifiers in Entrez order.
    async fn esearch(&self, term: &str) -> Result<Vec<String>>;

    /// Fetch the summary record for one gene identifier.
    async fn esummary(&self, uid: &str) -> Result<GeneRecord>;
}

pub struct EntrezClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl EntrezClient {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_base_url(Client::new()?, DEFAULT_BASE_URL, api_key)
    }

    /// Point the client at another E-utilities root (mirror or local stub).
    pub fn with_base_url(
        mut client: Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        client.allow_url(&base_url)?;
        Ok(Self {
            client,
            base_url,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    fn base_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("db", "gene".to_string()),
            ("retmode", "json".to_string()),
        ];
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }

    async fn get_json(&self, endpoint: &str, params: &[(&'static str, String)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let resp = self.client.get(&url)?.query(params).send().await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "E-utilities request failed");
            return Err(GeneInfoError::Upstream { status: status.as_u16() });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| GeneInfoError::MalformedResponse(format!("{}: {}", endpoint, e)))
    }
}

#[async_trait]
impl EntrezApi for EntrezClient {
    #[instrument(skip(self))]
    async fn esearch(&self, term: &str) -> Result<Vec<String>> {
        let mut params = self.base_params();
        params.push(("term", term.to_string()));
        params.push(("retmax", RETMAX.to_string()));

        let resp = self.get_json("esearch.fcgi", &params).await?;
        let ids = parse_id_list(&resp)?;
        debug!(?ids, "Gene esearch returned ids");
        Ok(ids)
    }

    #[instrument(skip(self))]
    async fn esummary(&self, uid: &str) -> Result<GeneRecord> {
        let mut params = self.base_params();
        params.push(("id", uid.to_string()));

        let resp = self.get_json("esummary.fcgi", &params).await?;
        parse_summary(&resp, uid)
    }
}

/// Extract `esearchresult.idlist` from an esearch JSON response.
pub fn parse_id_list(resp: &Value) -> Result<Vec<String>> {
    let result = &resp["esearchresult"];
    let Some(ids) = result["idlist"].as_array() else {
        let reason = result["ERROR"].as_str().unwrap_or("missing esearchresult.idlist");
        return Err(GeneInfoError::MalformedResponse(reason.to_string()));
    };

    Ok(ids
        .iter()
        .filter_map(|v| v.as_str().map(String::from))
        .collect())
}

/// Extract `result.<uid>` from an esummary JSON response.
pub fn parse_summary(resp: &Value, uid: &str) -> Result<GeneRecord> {
    let record = &resp["result"][uid];
    if !record.is_object() {
        return Err(GeneInfoError::MalformedResponse(format!(
            "esummary result has no record for uid {}",
            uid
        )));
    }
    if let Some(err) = record["error"].as_str() {
        return Err(GeneInfoError::MalformedResponse(format!("uid {}: {}", uid, err)));
    }
    GeneRecord::from_summary_json(record)
}
