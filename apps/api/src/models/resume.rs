use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored resume record. Created once per upload, immutable afterwards.
///
/// `skills_detected` is lower-cased and deduplicated before it reaches this
/// type; matching code relies on that invariant.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Option<String>,
    pub file_name: String,
    pub extracted_text: String,
    pub skills_detected: Vec<String>,
    pub education: Vec<String>,
    pub experience_years: String,
    pub uploaded_at: DateTime<Utc>,
}
