//! Configuration loading for GeneInfo.
//! Reads geneinfo.toml from the current directory or the path in GENEINFO_CONFIG.
//! Every section is optional; a missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use geneinfo_report::ReportOptions;

use crate::layout::{LayoutConfig, LayoutPreset};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ncbi: NcbiConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
    #[serde(default)]
    pub layout: LayoutSection,
    #[serde(default)]
    pub report: ReportOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NcbiConfig {
    #[serde(default = "default_ncbi_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_ncbi_base_url() -> String { geneinfo_sources::entrez::DEFAULT_BASE_URL.to_string() }
fn default_timeout_secs()  -> u64    { 30 }

impl Default for NcbiConfig {
    fn default() -> Self {
        Self {
            base_url: default_ncbi_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "bool_true")]
    pub enabled: bool,
    #[serde(default = "default_translate_base_url")]
    pub base_url: String,
}

fn bool_true() -> bool { true }
fn default_translate_base_url() -> String { geneinfo_translate::backend::DEFAULT_BASE_URL.to_string() }

impl Default for TranslationConfig {
    fn default() -> Self {
        Self { enabled: true, base_url: default_translate_base_url() }
    }
}

/// `[layout]`: a preset plus optional per-field overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutSection {
    #[serde(default)]
    pub preset: LayoutPreset,
    pub columns: Option<u8>,
    pub show_footer: Option<bool>,
    pub enable_pdf_export: Option<bool>,
}

impl LayoutSection {
    pub fn resolve(&self) -> anyhow::Result<LayoutConfig> {
        let mut layout = LayoutConfig::from(self.preset);
        if let Some(columns) = self.columns {
            if !(1..=2).contains(&columns) {
                anyhow::bail!("layout.columns must be 1 or 2, got {}", columns);
            }
            layout.columns = columns;
        }
        if let Some(show) = self.show_footer {
            layout.show_footer = show;
        }
        if let Some(export) = self.enable_pdf_export {
            layout.enable_pdf_export = export;
        }
        Ok(layout)
    }
}


impl Config {
    /// Load configuration from geneinfo.toml.
    /// Checks GENEINFO_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<Self> {
        let explicit = std::env::var("GENEINFO_CONFIG").ok();
        let path = explicit.clone().unwrap_or_else(|| "geneinfo.toml".to_string());

        let mut config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::from_toml_str(&content)?
        } else if explicit.is_some() {
            anyhow::bail!("Config file not found: {}", path);
        } else {
            tracing::debug!("No geneinfo.toml found, using defaults");
            Self::default()
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.layout.resolve()?;
        Ok(config)
    }

    /// Environment overrides, read through `lookup` so tests need not touch the process env.
    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(key) = lookup("GENEINFO_NCBI_API_KEY").filter(|k| !k.is_empty()) {
            self.ncbi.api_key = key;
        }
        if let Some(port) = lookup("GENEINFO_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
    }

    pub fn ncbi_api_key(&self) -> Option<String> {
        Some(self.ncbi.api_key.trim().to_string()).filter(|k| !k.is_empty())
    }
}
