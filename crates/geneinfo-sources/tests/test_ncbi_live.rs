//! Lookups against the real NCBI service.
//!
//! Run with: cargo test --package geneinfo-sources --test test_ncbi_live -- --ignored --nocapture

use geneinfo_common::{GeneInfoError, Organism};
use geneinfo_sources::{lookup, EntrezClient};

#[tokio::test]
#[ignore] // Requires network access
async fn test_live_brca1_human() {
    let client = EntrezClient::new(std::env::var("GENEINFO_NCBI_API_KEY").ok()).unwrap();
    let rec = lookup(&client, "BRCA1", Organism::HomoSapiens)
        .await
        .expect("NCBI lookup failed");

    println!("{} ({}) chr {:?} {:?}", rec.name, rec.uid, rec.chromosome, rec.maplocation);
    assert_eq!(rec.name, "BRCA1");
    assert_eq!(rec.organism.scientificname, "Homo sapiens");
}

#[tokio::test]
#[ignore] // Requires network access
async fn test_live_unknown_gene() {
    let client = EntrezClient::new(None).unwrap();
    let err = lookup(&client, "ZZZNOTAGENE", Organism::MusMusculus).await.unwrap_err();
    assert!(matches!(err, GeneInfoError::NotFound { .. }));
}
