//! EntrezClient against a local stub of the E-utilities endpoints.

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::{extract::Query, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use geneinfo_common::sandbox::SandboxClient;
use geneinfo_common::{GeneInfoError, Organism};
use geneinfo_sources::{lookup, EntrezClient};

async fn esearch(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    assert_eq!(params.get("db").map(String::as_str), Some("gene"));
    assert_eq!(params.get("retmode").map(String::as_str), Some("json"));

    let term = params.get("term").cloned().unwrap_or_default();
    match term.as_str() {
        "BRCA1[Gene Name] AND Homo sapiens[Organism]" => {
            Json(json!({"esearchresult": {"count": "2", "idlist": ["672", "12189"]}})).into_response()
        }
        "BROKEN[Gene Name] AND Homo sapiens[Organism]" => {
            (StatusCode::OK, "<html>not json</html>").into_response()
        }
        "DOWN[Gene Name] AND Homo sapiens[Organism]" => {
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
        "KEYED[Gene Name] AND Homo sapiens[Organism]" => {
            let ids = if params.get("api_key").map(String::as_str) == Some("secret") {
                vec!["672"]
            } else {
                vec![]
            };
            Json(json!({"esearchresult": {"idlist": ids}})).into_response()
        }
        _ => Json(json!({"esearchresult": {"count": "0", "idlist": []}})).into_response(),
    }
}

async fn esummary(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let id = params.get("id").cloned().unwrap_or_default();
    Json(json!({
        "result": {
            "uids": [id],
            id.clone(): {
                "uid": id,
                "name": "BRCA1",
                "description": "BRCA1 DNA repair associated",
                "organism": {"scientificname": "Homo sapiens", "commonname": "human", "taxid": 9606},
                "chromosome": "17",
                "maplocation": "17q21.31",
                "summary": ""
            }
        }
    }))
}

async fn spawn_stub() -> SocketAddr {
    let app = Router::new()
        .route("/esearch.fcgi", get(esearch))
        .route("/esummary.fcgi", get(esummary));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn client(api_key: Option<&str>) -> EntrezClient {
    let addr = spawn_stub().await;
    EntrezClient::with_base_url(
        SandboxClient::new().unwrap(),
        format!("http://{}/", addr),
        api_key.map(String::from),
    )
    .unwrap()
}

#[tokio::test]
async fn test_lookup_brca1_via_stub() {
    let client = client(None).await;
    let rec = lookup(&client, "BRCA1", Organism::HomoSapiens).await.unwrap();
    assert_eq!(rec.uid, "672");
    assert_eq!(rec.name, "BRCA1");
    assert_eq!(rec.organism.scientificname, "Homo sapiens");
    assert_eq!(rec.summary.as_deref(), Some(""));
}

#[tokio::test]
async fn test_lookup_unknown_gene_via_stub() {
    let client = client(None).await;
    let err = lookup(&client, "ZZZNOTAGENE", Organism::HomoSapiens).await.unwrap_err();
    assert!(matches!(err, GeneInfoError::NotFound { .. }));
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let client = client(None).await;
    let err = lookup(&client, "BROKEN", Organism::HomoSapiens).await.unwrap_err();
    assert!(matches!(err, GeneInfoError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_http_error_status_is_upstream() {
    let client = client(None).await;
    let err = lookup(&client, "DOWN", Organism::HomoSapiens).await.unwrap_err();
    assert!(matches!(err, GeneInfoError::Upstream { status: 503 }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_api_key_is_forwarded() {
    let client = client(Some("secret")).await;
    let rec = lookup(&client, "KEYED", Organism::HomoSapiens).await.unwrap();
    assert_eq!(rec.uid, "672");
}

#[tokio::test]
async fn test_unreachable_host_is_http_error() {
    // Nothing listens on port 9 locally.
    let client = EntrezClient::with_base_url(SandboxClient::new().unwrap(), "http://127.0.0.1:9", None).unwrap();
    let err = lookup(&client, "BRCA1", Organism::HomoSapiens).await.unwrap_err();
    assert!(matches!(err, GeneInfoError::Http(_)));
}
