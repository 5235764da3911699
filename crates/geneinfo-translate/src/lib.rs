//! geneinfo-translate — Best-effort localisation of display strings.
//!
//! A [`Localizer`] wraps a [`TranslationBackend`] and never fails outward:
//! any backend error falls back to the untranslated text.

pub mod backend;
pub mod localizer;

pub use backend::{GoogleTranslateBackend, TranslateError, TranslationBackend};
pub use localizer::{Localizer, Translation};
