//! Core entity types shared by the lookup client, the report exporter and the web UI.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeneInfoError;

// ---------------------------------------------------------------------------
// Organism
// ---------------------------------------------------------------------------

/// Species scope for a gene search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Organism {
    #[default]
    #[serde(rename = "Homo sapiens")]
    HomoSapiens,
    #[serde(rename = "Mus musculus")]
    MusMusculus,
}

impl Organism {
    pub const ALL: [Organism; 2] = [Organism::HomoSapiens, Organism::MusMusculus];

    /// Scientific name as used in the Entrez `[Organism]` qualifier.
    pub fn scientific_name(&self) -> &'static str {
        match self {
            Organism::HomoSapiens => "Homo sapiens",
            Organism::MusMusculus => "Mus musculus",
        }
    }
}

impl fmt::Display for Organism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scientific_name())
    }
}

impl FromStr for Organism {
    type Err = GeneInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['_', '-'], " ");
        match key.as_str() {
            "homo sapiens" | "homosapiens" | "human" => Ok(Organism::HomoSapiens),
            "mus musculus" | "musmusculus" | "mouse" => Ok(Organism::MusMusculus),
            _ => Err(GeneInfoError::InvalidInput(format!("unsupported organism: {}", s))),
        }
    }
}

// ---------------------------------------------------------------------------
// Display language
// ---------------------------------------------------------------------------

/// Display language for labels and free-text record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ur")]
    Urdu,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Urdu,
        Language::French,
        Language::Hindi,
        Language::Spanish,
    ];

    /// ISO 639-1 code passed to the translation service.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Urdu    => "ur",
            Language::French  => "fr",
            Language::Hindi   => "hi",
            Language::Spanish => "es",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Urdu    => "Urdu",
            Language::French  => "French",
            Language::Hindi   => "Hindi",
            Language::Spanish => "Spanish",
        }
    }

    /// English needs no translation.
    pub fn is_default(&self) -> bool {
        matches!(self, Language::English)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = GeneInfoError;

    /// Accepts either the display label ("French") or the ISO code ("fr").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Language::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(key) || l.label().eq_ignore_ascii_case(key))
            .ok_or_else(|| GeneInfoError::InvalidInput(format!("unsupported language: {}", s)))
    }
}

// ---------------------------------------------------------------------------
// Gene summary record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganismInfo {
    pub scientificname: String,
    pub commonname: Option<String>,
    pub taxid: Option<u64>,
}

/// One NCBI Gene summary record, kept as returned by `esummary`.
///
/// Only the fields the UI and report use are typed; everything else lands in
/// `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneRecord {
    pub uid: String,
    pub name: String,
    pub organism: OrganismInfo,
    pub chromosome: Option<String>,
    pub maplocation: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Placeholder shown for a missing chromosome or map location.
pub const NOT_AVAILABLE: &str = "not available";
/// Placeholder shown for a missing description or summary.
pub const NOT_AVAILABLE_TEXT: &str = "Not available";

impl GeneRecord {
    pub fn chromosome_or_default(&self) -> &str {
        non_empty(self.chromosome.as_deref()).unwrap_or(NOT_AVAILABLE)
    }

    pub fn maplocation_or_default(&self) -> &str {
        non_empty(self.maplocation.as_deref()).unwrap_or(NOT_AVAILABLE)
    }

    pub fn description_or_default(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or(NOT_AVAILABLE_TEXT)
    }

    pub fn summary_or_default(&self) -> &str {
        non_empty(self.summary.as_deref()).unwrap_or(NOT_AVAILABLE_TEXT)
    }

    /// Build a record from the JSON object keyed by its uid in an esummary result.
    pub fn from_summary_json(value: &serde_json::Value) -> crate::Result<Self> {
        serde_json::from_value(value.clone()).map_err(|e| {
            GeneInfoError::MalformedResponse(format!("gene summary record: {}", e))
        })
    }
}

/// NCBI reports unknown fields as `""`; treat those as absent for display.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
