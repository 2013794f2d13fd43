//! Internal job store queries.

use sqlx::PgPool;

use crate::models::job::JobRow;

/// At most this many skills feed the internal match query.
pub const MAX_SKILL_TERMS: usize = 5;

/// Finds stored jobs whose title or description contains any of the given
/// skills (case-insensitive substring). Skills are expected lower-cased and
/// deduplicated already.
pub async fn find_jobs_matching_skills(
    pool: &PgPool,
    skills: &[String],
    limit: i64,
) -> Result<Vec<JobRow>, sqlx::Error> {
    if skills.is_empty() {
        return Ok(Vec::new());
    }

    let patterns: Vec<String> = skills
        .iter()
        .take(MAX_SKILL_TERMS)
        .map(|s| format!("%{}%", escape_like(s)))
        .collect();

    sqlx::query_as::<_, JobRow>(
        r#"
        SELECT id, title, employer, location, description
        FROM jobs
        WHERE title ILIKE ANY($1) OR description ILIKE ANY($1)
        ORDER BY title
        LIMIT $2
        "#,
    )
    .bind(&patterns)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Escapes LIKE wildcards so a skill is matched literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
