//! Translation backend trait and the Google Translate implementation.

use async_trait::async_trait;
use thiserror::Error;
use tracing::instrument;

use geneinfo_common::sandbox::SandboxClient as Client;
use geneinfo_common::GeneInfoError;

pub const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com";

/// Longest text the public endpoint accepts in one call.
pub const MAX_PAYLOAD_CHARS: usize = 5000;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Client error: {0}")]
    Client(#[from] GeneInfoError),
    #[error("Translation service returned HTTP {0}")]
    Status(u16),
    #[error("Unexpected response: {0}")]
    Parse(String),
    #[error("Payload too long: {len} characters (max {})", MAX_PAYLOAD_CHARS)]
    PayloadTooLong { len: usize },
}

// ── Trait ─────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Translate `text` from `source` (ISO code or "auto") to `target`.
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslateError>;

    fn name(&self) -> &str;
}

// ── Google Translate ──────────────────────────────────────────────────────────

pub struct GoogleTranslateBackend {
    client: Client,
    base_url: String,
}

impl GoogleTranslateBackend {
    pub fn new() -> Result<Self, TranslateError> {
        Self::with_base_url(Client::new()?, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(mut client: Client, base_url: impl Into<String>) -> Result<Self, TranslateError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        client.allow_url(&base_url)?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl TranslationBackend for GoogleTranslateBackend {
    #[instrument(skip(self, text), fields(len = text.chars().count()))]
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String, TranslateError> {
        let len = text.chars().count();
        if len > MAX_PAYLOAD_CHARS {
            return Err(TranslateError::PayloadTooLong { len });
        }

        let url = format!("{}/translate_a/single", self.base_url);
        let resp = self.client
            .get(&url)?
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TranslateError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        let json: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| TranslateError::Parse(e.to_string()))?;
        parse_google_response(&json)
    }

    fn name(&self) -> &str { "google" }
}

/// Join the translated segments of a `translate_a/single` response.
///
/// Shape: `[[["Bonjour le monde", "Hello world", null, null, 10], ...], null, "en", ...]`
pub fn parse_google_response(json: &serde_json::Value) -> Result<String, TranslateError> {
    let segments = json[0]
        .as_array()
        .ok_or_else(|| TranslateError::Parse("missing segment list".to_string()))?;

    let text: String = segments
        .iter()
        .filter_map(|seg| seg[0].as_str())
        .collect();

    if text.is_empty() {
        return Err(TranslateError::Parse("no translated text".to_string()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_joins_segments() {
        let resp = json!([
            [["Bonjour. ", "Hello. ", null, null, 10], ["Au revoir.", "Goodbye.", null, null, 10]],
            null,
            "en"
        ]);
        assert_eq!(parse_google_response(&resp).unwrap(), "Bonjour. Au revoir.");
    }

    #[test]
    fn test_parse_rejects_unexpected_shape() {
        assert!(parse_google_response(&json!({"error": "quota"})).is_err());
        assert!(parse_google_response(&json!([[]])).is_err());
    }

    #[tokio::test]
    async fn test_payload_too_long_fails_without_request() {
        let backend = GoogleTranslateBackend::with_base_url(
            Client::new().unwrap(),
            "http://127.0.0.1:9",
        )
        .unwrap();
        let text = "a".repeat(MAX_PAYLOAD_CHARS + 1);
        let err = backend.translate(&text, "auto", "fr").await.unwrap_err();
        assert!(matches!(err, TranslateError::PayloadTooLong { len } if len == MAX_PAYLOAD_CHARS + 1));
    }
}
