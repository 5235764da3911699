//! Page layout parameters shared by every page variant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named layouts for the three page variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPreset {
    /// Single column, no footer, no export.
    #[default]
    Centered,
    /// Two columns with a footer.
    Wide,
    /// Two columns, footer and PDF export.
    Report,
}

impl LayoutPreset {
    pub fn name(&self) -> &'static str {
        match self {
            LayoutPreset::Centered => "centered",
            LayoutPreset::Wide => "wide",
            LayoutPreset::Report => "report",
        }
    }
}

impl fmt::Display for LayoutPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "centered" => Ok(LayoutPreset::Centered),
            "wide" => Ok(LayoutPreset::Wide),
            "report" => Ok(LayoutPreset::Report),
            other => Err(format!("unknown layout preset: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub preset: LayoutPreset,
    /// 1 or 2 result columns.
    pub columns: u8,
    pub show_footer: bool,
    pub enable_pdf_export: bool,
}

impl From<LayoutPreset> for LayoutConfig {
    fn from(preset: LayoutPreset) -> Self {
        let (columns, show_footer, enable_pdf_export) = match preset {
            LayoutPreset::Centered => (1, false, false),
            LayoutPreset::Wide => (2, true, false),
            LayoutPreset::Report => (2, true, true),
        };
        Self { preset, columns, show_footer, enable_pdf_export }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutPreset::default().into()
    }
}
