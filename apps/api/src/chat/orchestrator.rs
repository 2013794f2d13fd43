//! Per-message dialogue pipeline: load history, classify, generate, persist.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::chat::history::{append_exchange, get_history, HISTORY_WINDOW};
use crate::chat::intent::classify;
use crate::chat::responder::generate;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub conversation_id: String,
}

/// Runs one user message through the pipeline. Only the final history write
/// can fail; everything before it degrades to reply text.
pub async fn handle_exchange(
    state: &AppState,
    request: ChatRequest,
) -> Result<ChatResponse, AppError> {
    // An empty message is not rejected; it falls through the classifier to
    // the generic fallback like any other unrecognized text.
    let message = request.message.trim().to_string();

    let conversation_id = request
        .conversation_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let history = get_history(&state.db, &conversation_id, HISTORY_WINDOW).await;
    let intent = classify(&message, !history.is_empty());
    info!(%conversation_id, ?intent, "classified message");

    let reply = generate(
        state,
        intent,
        &message,
        request.user_id.as_deref(),
        &history,
    )
    .await;

    append_exchange(
        &state.db,
        &conversation_id,
        request.user_id.as_deref(),
        &message,
        &reply,
        Utc::now(),
    )
    .await?;

    Ok(ChatResponse {
        reply,
        conversation_id,
    })
}
