use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the internal `events` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventRow {
    pub id: Uuid,
    pub name: String,
    pub topic: Option<String>,
    pub date_text: Option<String>,
}

/// A row from the internal `mentorship` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MentorRow {
    pub id: Uuid,
    pub mentor_name: String,
    pub expertise: String,
    pub availability: Option<String>,
}
