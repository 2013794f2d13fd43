//! Resume-to-jobs matching endpoint.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::store::find_jobs_matching_skills;
use crate::models::job::JobListing;
use crate::resume::store::resume_by_id;
use crate::state::AppState;

const MATCHED_JOBS_LIMIT: i64 = 10;

#[derive(Debug, Serialize)]
pub struct MatchJobsResponse {
    pub matched_jobs: Vec<JobListing>,
}

/// GET /match-jobs/:resume_id
///
/// Returns internal listings whose title or description contains any of the
/// resume's detected skills. An unknown resume id is an explicit not-found;
/// an empty match list is a normal outcome.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<MatchJobsResponse>, AppError> {
    let resume = resume_by_id(&state.db, resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    let rows = find_jobs_matching_skills(&state.db, &resume.skills_detected, MATCHED_JOBS_LIMIT)
        .await?;

    Ok(Json(MatchJobsResponse {
        matched_jobs: rows.into_iter().map(JobListing::from).collect(),
    }))
}
