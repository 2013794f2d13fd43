//! Identity provider (Firebase Auth REST API).
//!
//! Unlike the other providers, rejections here are surfaced to the caller
//! verbatim: the provider's status code and message are the contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::providers::error::ProviderError;

const IDENTITY_API_URL: &str = "https://identitytoolkit.googleapis.com/v1";

#[derive(Debug, Serialize)]
struct CredentialPayload<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
struct IdentityError {
    error: IdentityErrorBody,
}

#[derive(Debug, Deserialize)]
struct IdentityErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct FirebaseAuthClient {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl FirebaseAuthClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: super::http_client(),
            api_key,
        }
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Value, ProviderError> {
        self.call("accounts:signUp", email, password).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Value, ProviderError> {
        self.call("accounts:signInWithPassword", email, password)
            .await
    }

    async fn call(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<Value, ProviderError> {
        let api_key = self.api_key.as_ref().ok_or(ProviderError::MissingCredential)?;

        let response = self
            .client
            .post(format!("{IDENTITY_API_URL}/{endpoint}?key={api_key}"))
            .json(&CredentialPayload {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<IdentityError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
