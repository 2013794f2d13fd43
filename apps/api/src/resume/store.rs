//! Resume persistence. Records are written once per upload and never updated.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::resume::ResumeRow;
use crate::resume::extractor::ResumeFields;

pub async fn insert_resume(
    pool: &PgPool,
    user_id: Option<&str>,
    file_name: &str,
    extracted_text: &str,
    fields: &ResumeFields,
) -> Result<Uuid, sqlx::Error> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO resumes
            (id, user_id, file_name, extracted_text, skills_detected,
             education, experience_years, uploaded_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(file_name)
    .bind(extracted_text)
    .bind(&fields.skills)
    .bind(&fields.education)
    .bind(&fields.experience_years)
    .bind(Utc::now())
    .execute(pool)
    .await?;
    Ok(id)
}

pub async fn resume_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// The most recently uploaded resume for a user, if any.
pub async fn latest_resume_for_user(
    pool: &PgPool,
    user_id: &str,
) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY uploaded_at DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
