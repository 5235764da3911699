//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Duration;

use minijinja::Environment;

use geneinfo_common::sandbox::SandboxClient;
use geneinfo_report::ReportOptions;
use geneinfo_sources::{EntrezApi, EntrezClient};
use geneinfo_translate::{GoogleTranslateBackend, Localizer};

use crate::config::Config;
use crate::layout::{LayoutConfig, LayoutPreset};

/// Page template, embedded at compile time.
pub const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");

/// Shared state injected into every Axum handler. Immutable after startup.
pub struct AppState {
    pub entrez: Arc<dyn EntrezApi>,
    pub localizer: Localizer,
    pub layout: LayoutConfig,
    pub report: ReportOptions,
    pub templates: Environment<'static>,
}

impl AppState {
    pub fn new(
        entrez: Arc<dyn EntrezApi>,
        localizer: Localizer,
        layout: LayoutConfig,
        report: ReportOptions,
    ) -> anyhow::Result<Self> {
        let mut templates = Environment::new();
        templates.add_template("page.html", PAGE_TEMPLATE)?;
        Ok(Self { entrez, localizer, layout, report, templates })
    }

    /// Wire the production NCBI and translation clients from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = SandboxClient::with_timeout(Duration::from_secs(config.ncbi.timeout_secs))?;

        let entrez = EntrezClient::with_base_url(
            client.clone(),
            config.ncbi.base_url.as_str(),
            config.ncbi_api_key(),
        )?;

        let localizer = if config.translation.enabled {
            let backend = GoogleTranslateBackend::with_base_url(client, config.translation.base_url.as_str())?;
            Localizer::new(Arc::new(backend))
        } else {
            tracing::info!("Translation disabled, all pages render in English");
            Localizer::disabled()
        };

        Self::new(Arc::new(entrez), localizer, config.layout.resolve()?, config.report)
    }

    /// Layout for one request: a valid `?layout=` preset wins over the configured one.
    pub fn layout_for(&self, requested: Option<&str>) -> LayoutConfig {
        match requested.map(str::parse::<LayoutPreset>) {
            Some(Ok(preset)) if preset != self.layout.preset => preset.into(),
            _ => self.layout,
        }
    }
}

pub type SharedState = Arc<AppState>;
