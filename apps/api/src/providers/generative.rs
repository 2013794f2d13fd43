//! Generative text completion.
//!
//! The responder walks a fallback chain: remote API, then local model, then a
//! static message. Both generator slots implement `TextCompletion`; the local
//! slot is optional and absent unless a local runtime is wired in at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::providers::error::ProviderError;

const HF_API_URL: &str = "https://api-inference.huggingface.co/models";
/// Same model lineage the assistant has always answered generic career
/// questions with.
pub const HF_MODEL: &str = "google/flan-t5-small";

#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ProviderError>;
}

#[derive(Debug, Serialize)]
struct HfRequest<'a> {
    inputs: &'a str,
    parameters: HfParameters,
}

#[derive(Debug, Serialize)]
struct HfParameters {
    max_new_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct HfGeneration {
    #[serde(default)]
    generated_text: String,
}

/// Hugging Face Inference API client for the remote leg of the chain.
pub struct HfInferenceClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl HfInferenceClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: super::http_client(),
            api_key,
            model: HF_MODEL.to_string(),
        }
    }
}

#[async_trait]
impl TextCompletion for HfInferenceClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_ref().ok_or(ProviderError::MissingCredential)?;

        let response = self
            .client
            .post(format!("{HF_API_URL}/{}", self.model))
            .bearer_auth(api_key)
            .json(&HfRequest {
                inputs: prompt,
                parameters: HfParameters {
                    max_new_tokens: max_tokens,
                },
            })
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

        let generations: Vec<HfGeneration> = response.json().await?;
        let text = generations
            .into_iter()
            .map(|g| g.generated_text)
            .find(|t| !t.trim().is_empty())
            .ok_or(ProviderError::Empty)?;

        debug!("remote generation produced {} chars", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_reports_missing_credential() {
        let client = HfInferenceClient::new(None);
        let err = client.complete("what is a resume", 64).await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredential));
    }

    #[test]
    fn test_generation_response_shape() {
        let json = r#"[{"generated_text": "A resume summarizes your experience."}]"#;
        let generations: Vec<HfGeneration> = serde_json::from_str(json).unwrap();
        assert_eq!(
            generations[0].generated_text,
            "A resume summarizes your experience."
        );
    }
}
