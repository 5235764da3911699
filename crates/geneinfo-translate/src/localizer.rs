//! Best-effort localisation of UI labels and record text.

use std::sync::Arc;

use tracing::{debug, warn};

use geneinfo_common::Language;

use crate::backend::{TranslateError, TranslationBackend};

/// Outcome of one localisation attempt.
#[derive(Debug)]
pub enum Translation {
    /// The text to display: translated, or untouched when no call was needed.
    Translated(String),
    /// The backend failed; `text` is the original input.
    Fallback { text: String, cause: TranslateError },
}

impl Translation {
    pub fn text(&self) -> &str {
        match self {
            Translation::Translated(text) => text,
            Translation::Fallback { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Translation::Translated(text) => text,
            Translation::Fallback { text, .. } => text,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Translation::Fallback { .. })
    }
}

/// Passes display strings through a translation backend, one call per string.
///
/// English targets, blank strings and a disabled localizer never reach the backend.
#[derive(Clone)]
pub struct Localizer {
    backend: Option<Arc<dyn TranslationBackend>>,
}

impl Localizer {
    pub fn new(backend: Arc<dyn TranslationBackend>) -> Self {
        Self { backend: Some(backend) }
    }

    /// A localizer that returns every string unchanged.
    pub fn disabled() -> Self {
        Self { backend: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    pub async fn translate(&self, text: &str, target: Language) -> Translation {
        let backend = match &self.backend {
            Some(b) if !target.is_default() && !text.trim().is_empty() => b,
            _ => return Translation::Translated(text.to_string()),
        };

        match backend.translate(text, "auto", target.code()).await {
            Ok(translated) => {
                debug!(backend = backend.name(), target = target.code(), "Translated text");
                Translation::Translated(translated)
            }
            Err(cause) => {
                warn!(backend = backend.name(), target = target.code(), error = %cause, "Translation failed, showing original text");
                Translation::Fallback { text: text.to_string(), cause }
            }
        }
    }

    /// Translate for display. Never fails: errors yield the original text.
    pub async fn tr(&self, text: &str, target: Language) -> String {
        self.translate(text, target).await.into_text()
    }
}
