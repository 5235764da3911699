use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;
use crate::error::GeneInfoError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// An HTTP client that only allows requests to approved domains.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a new SandboxClient with the default allowlist and a 30 s timeout.
    pub fn new() -> Result<Self, GeneInfoError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, GeneInfoError> {
        let domains = [
            "eutils.ncbi.nlm.nih.gov",   // NCBI E-utilities
            "translate.googleapis.com",  // Google Translate
            "localhost",
            "127.0.0.1",
        ];
        let allowlist = domains.iter().map(|d| d.to_string()).collect();

        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("geneinfo/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeneInfoError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Adds the host of `url` to the allowlist. Used for configured base URLs.
    pub fn allow_url(&mut self, url: &str) -> Result<(), GeneInfoError> {
        let parsed = Url::parse(url)
            .map_err(|e| GeneInfoError::Config(format!("invalid URL {}: {}", url, e)))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| GeneInfoError::Config(format!("URL has no host: {}", url)))?;
        if !self.allowlist.contains(host) {
            tracing::debug!(host, "Extending HTTP allowlist");
            self.allow_domain(host);
        }
        Ok(())
    }

    /// Validates if a URL is permitted under the current sandbox policy.
    pub fn is_allowed(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else { return false };
        let Some(host) = parsed.host_str() else { return false };
        self.allowlist
            .iter()
            .any(|allowed| host == allowed || host.ends_with(&format!(".{}", allowed)))
    }

    /// Exposes the inner `reqwest::Client` builder pattern safely for GET requests.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, GeneInfoError> {
        if !self.is_allowed(url) {
            return Err(GeneInfoError::Security(format!(
                "Network capabilities capped: domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}
