//! Conversation store adapter.
//!
//! Conversations are rows keyed by conversation_id with the turn sequence in
//! a JSONB array. Reads degrade silently to empty; absence of history is a
//! normal state, not an error. The append is a single conditional upsert so
//! concurrent exchanges on one conversation can never interleave into a
//! half-written (user, assistant) pair.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::warn;

use crate::errors::AppError;
use crate::models::conversation::ConversationTurn;

/// How many recent turns the orchestrator reads per exchange.
pub const HISTORY_WINDOW: usize = 5;

/// Returns the most recent `limit` turns in chronological order.
/// Unknown ids, missing rows, unreadable JSON, and query failures all yield
/// an empty history.
pub async fn get_history(
    pool: &PgPool,
    conversation_id: &str,
    limit: usize,
) -> Vec<ConversationTurn> {
    let raw = sqlx::query_scalar::<_, serde_json::Value>(
        "SELECT messages FROM conversations WHERE conversation_id = $1",
    )
    .bind(conversation_id)
    .fetch_optional(pool)
    .await;

    let value = match raw {
        Ok(Some(v)) => v,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("history read failed for conversation {conversation_id}: {e}");
            return Vec::new();
        }
    };

    let turns: Vec<ConversationTurn> = match serde_json::from_value(value) {
        Ok(turns) => turns,
        Err(e) => {
            warn!("unreadable history for conversation {conversation_id}: {e}");
            return Vec::new();
        }
    };

    tail_window(turns, limit)
}

/// Appends one (user, assistant) pair atomically and bumps `last_updated`.
/// Creates the conversation on first exchange. Ordering between concurrent
/// exchanges is last-write-wins on `last_updated`; the pair itself is never
/// split.
pub async fn append_exchange(
    pool: &PgPool,
    conversation_id: &str,
    user_id: Option<&str>,
    user_message: &str,
    assistant_message: &str,
    timestamp: DateTime<Utc>,
) -> Result<(), AppError> {
    let pair = vec![
        ConversationTurn::user(user_message, timestamp),
        ConversationTurn::assistant(assistant_message, timestamp),
    ];
    let pair = serde_json::to_value(&pair)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serializing exchange: {e}")))?;

    sqlx::query(
        r#"
        INSERT INTO conversations (conversation_id, user_id, messages, created_at, last_updated)
        VALUES ($1, $2, $3, $4, $4)
        ON CONFLICT (conversation_id) DO UPDATE
        SET messages = conversations.messages || EXCLUDED.messages,
            last_updated = EXCLUDED.last_updated
        "#,
    )
    .bind(conversation_id)
    .bind(user_id)
    .bind(&pair)
    .bind(timestamp)
    .execute(pool)
    .await?;

    Ok(())
}

/// Keeps the last `limit` turns, preserving chronological order.
fn tail_window(turns: Vec<ConversationTurn>, limit: usize) -> Vec<ConversationTurn> {
    let skip = turns.len().saturating_sub(limit);
    turns.into_iter().skip(skip).collect()
}
