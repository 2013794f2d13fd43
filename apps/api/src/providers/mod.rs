//! Outbound provider clients.
//!
//! Every provider call returns `Result<_, ProviderError>`. Callers pattern
//! match and degrade to reply text; no provider failure is allowed to escape
//! a component boundary as an unhandled error.

pub mod error;
pub mod eventbrite;
pub mod generative;
pub mod identity;
pub mod jsearch;

use std::time::Duration;

/// Bound on every outbound call. Timeout is treated identically to any other
/// provider failure: the caller falls through its chain.
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(8);

/// Builds the shared reqwest client with the provider timeout applied.
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(PROVIDER_TIMEOUT)
        .build()
        .expect("Failed to build HTTP client")
}
