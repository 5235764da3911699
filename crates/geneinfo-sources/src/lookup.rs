//! Two-step gene lookup: esearch for the identifier list, esummary for the first hit.

use tracing::{info, instrument};

use geneinfo_common::{GeneInfoError, GeneRecord, Organism, Result};

use crate::entrez::EntrezApi;
use crate::query::search_term;

/// Resolve a gene symbol in one organism to its NCBI Gene summary record.
///
/// The first identifier returned by esearch is authoritative; no ranking or
/// disambiguation happens here.
#[instrument(skip(api))]
pub async fn lookup<A>(api: &A, symbol: &str, organism: Organism) -> Result<GeneRecord>
where
    A: EntrezApi + ?Sized,
{
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(GeneInfoError::InvalidInput("gene symbol is empty".to_string()));
    }

    let ids = api.esearch(&search_term(symbol, organism)).await?;
    let Some(uid) = ids.first() else {
        info!(symbol, %organism, "No gene matched");
        return Err(GeneInfoError::NotFound {
            symbol: symbol.to_string(),
            organism: organism.to_string(),
        });
    };

    let record = api.esummary(uid).await?;
    info!(symbol, uid = %record.uid, name = %record.name, "Gene resolved");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// In-memory Entrez that records every call it receives.
    struct FakeEntrez {
        ids: Vec<String>,
        fail_summary: bool,
        calls: Mutex<Vec<String>>,
    }

    impl FakeEntrez {
        fn with_ids(ids: &[&str]) -> Self {
            Self {
                ids: ids.iter().map(|s| s.to_string()).collect(),
                fail_summary: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EntrezApi for FakeEntrez {
        async fn esearch(&self, term: &str) -> Result<Vec<String>> {
            self.calls.lock().unwrap().push(format!("esearch:{}", term));
            Ok(self.ids.clone())
        }

        async fn esummary(&self, uid: &str) -> Result<GeneRecord> {
            self.calls.lock().unwrap().push(format!("esummary:{}", uid));
            if self.fail_summary {
                return Err(GeneInfoError::Upstream { status: 503 });
            }
            GeneRecord::from_summary_json(&json!({
                "uid": uid,
                "name": format!("GENE{}", uid),
                "organism": {"scientificname": "Homo sapiens"},
            }))
        }
    }

    #[tokio::test]
    async fn test_lookup_uses_first_identifier() {
        let api = FakeEntrez::with_ids(&["672", "12189", "100"]);
        let rec = lookup(&api, "BRCA1", Organism::HomoSapiens).await.unwrap();
        assert_eq!(rec.uid, "672");
        assert_eq!(
            api.calls(),
            vec![
                "esearch:BRCA1[Gene Name] AND Homo sapiens[Organism]".to_string(),
                "esummary:672".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_lookup_empty_idlist_is_not_found() {
        let api = FakeEntrez::with_ids(&[]);
        let err = lookup(&api, "ZZZNOTAGENE", Organism::MusMusculus).await.unwrap_err();
        assert!(matches!(err, GeneInfoError::NotFound { ref symbol, .. } if symbol == "ZZZNOTAGENE"));
        assert_eq!(api.calls().len(), 1, "no summary call after an empty search");
    }

    #[tokio::test]
    async fn test_lookup_blank_symbol_makes_no_calls() {
        let api = FakeEntrez::with_ids(&["672"]);
        let err = lookup(&api, "   ", Organism::HomoSapiens).await.unwrap_err();
        assert!(matches!(err, GeneInfoError::InvalidInput(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_lookup_propagates_transport_failure() {
        let mut api = FakeEntrez::with_ids(&["672"]);
        api.fail_summary = true;
        let err = lookup(&api, "BRCA1", Organism::HomoSapiens).await.unwrap_err();
        assert!(err.is_retryable());
        assert!(!matches!(err, GeneInfoError::NotFound { .. }));
    }
}
