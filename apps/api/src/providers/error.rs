use thiserror::Error;

/// Failure reasons shared by all outbound providers.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API credential is not configured")]
    MissingCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider returned no usable content")]
    Empty,
}
