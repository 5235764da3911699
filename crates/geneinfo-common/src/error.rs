use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneInfoError {
    #[error("Gene not found: {symbol} ({organism})")]
    NotFound { symbol: String, organism: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream service returned HTTP {status}")]
    Upstream { status: u16 },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Security error: {0}")]
    Security(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GeneInfoError {
    /// True for failures of the external service that a user can sensibly retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Upstream { .. } | Self::MalformedResponse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GeneInfoError>;
