//! External events provider (Eventbrite).

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::providers::error::ProviderError;

const EVENTBRITE_API_URL: &str = "https://www.eventbriteapi.com/v3/events/search/";

/// A provider event, normalized to the one field the responder renders.
#[derive(Debug, Clone)]
pub struct ExternalEvent {
    pub title: String,
}

#[async_trait]
pub trait EventsProvider: Send + Sync {
    async fn search(&self) -> Result<Vec<ExternalEvent>, ProviderError>;
}

// Eventbrite nests the display name under `name.text`.
#[derive(Debug, Deserialize)]
struct EventbriteResponse {
    #[serde(default)]
    events: Vec<EventbriteEvent>,
}

#[derive(Debug, Deserialize)]
struct EventbriteEvent {
    #[serde(default)]
    name: Option<EventbriteName>,
}

#[derive(Debug, Deserialize)]
struct EventbriteName {
    #[serde(default)]
    text: Option<String>,
}

pub struct EventbriteClient {
    client: reqwest::Client,
    api_key: Option<String>,
}

impl EventbriteClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: super::http_client(),
            api_key,
        }
    }
}

#[async_trait]
impl EventsProvider for EventbriteClient {
    async fn search(&self) -> Result<Vec<ExternalEvent>, ProviderError> {
        let api_key = self.api_key.as_ref().ok_or(ProviderError::MissingCredential)?;

        let response = self
            .client
            .get(EVENTBRITE_API_URL)
            .bearer_auth(api_key)
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

        let body: EventbriteResponse = response.json().await?;
        let events: Vec<ExternalEvent> = body
            .events
            .into_iter()
            .filter_map(|e| e.name.and_then(|n| n.text))
            .filter(|t| !t.trim().is_empty())
            .map(|title| ExternalEvent { title })
            .collect();
        debug!("Eventbrite returned {} events", events.len());
        Ok(events)
    }
}
