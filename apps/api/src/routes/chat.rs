use axum::extract::State;
use axum::Json;

use crate::chat::orchestrator::{handle_exchange, ChatRequest, ChatResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /chat
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let response = handle_exchange(&state, request).await?;
    Ok(Json(response))
}
