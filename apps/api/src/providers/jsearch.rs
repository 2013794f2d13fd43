//! External job-search provider (JSearch on RapidAPI).

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::models::job::ExternalJob;
use crate::providers::error::ProviderError;

const JSEARCH_API_URL: &str = "https://jsearch.p.rapidapi.com/search";
const JSEARCH_API_HOST: &str = "jsearch.p.rapidapi.com";

/// Seam for the external job search. The engine only depends on this trait;
/// tests substitute stubs.
#[async_trait]
pub trait JobSearchProvider: Send + Sync {
    async fn search(&self, query: &str, page: u32) -> Result<Vec<ExternalJob>, ProviderError>;
}

#[derive(Debug, Deserialize)]
struct JSearchResponse {
    #[serde(default)]
    data: Vec<ExternalJob>,
}

/// JSearch client. Constructed once at startup; the key may be absent, in
/// which case every search reports `MissingCredential`.
pub struct JSearchClient {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl JSearchClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: super::http_client(),
            api_key,
        }
    }
}

#[async_trait]
impl JobSearchProvider for JSearchClient {
    async fn search(&self, query: &str, page: u32) -> Result<Vec<ExternalJob>, ProviderError> {
        let api_key = self.api_key.as_ref().ok_or(ProviderError::MissingCredential)?;

        let response = self
            .client
            .get(JSEARCH_API_URL)
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", JSEARCH_API_HOST)
            .query(&[("query", query), ("page", &page.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: JSearchResponse = response.json().await?;
        debug!("JSearch returned {} listings for '{query}'", body.data.len());
        Ok(body.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_reports_missing_credential() {
        let client = JSearchClient::new(None);
        let err = client.search("data jobs", 1).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredential));
    }

    #[test]
    fn test_response_tolerates_absent_data_field() {
        let body: JSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(body.data.is_empty());
    }
}
