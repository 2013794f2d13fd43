//! Resume upload endpoint.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::resume::extractor::{extract, ResumeFields};
use crate::resume::store::insert_resume;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResumeResponse {
    pub resume_id: Uuid,
    pub skills_detected: Vec<String>,
    pub summary: String,
}

/// POST /upload-resume
///
/// Accepts a multipart `file` field (PDF or plain text) and an optional
/// `user_id` field, extracts text, parses structured fields, and stores the
/// record.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResumeResponse>, AppError> {
    let mut file_name = String::from("resume");
    let mut file_bytes: Option<bytes::Bytes> = None;
    let mut user_id: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        match field.name() {
            Some("file") => {
                if let Some(name) = field.file_name() {
                    file_name = name.to_string();
                }
                file_bytes = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("unreadable upload: {e}")))?,
                );
            }
            Some("user_id") => {
                user_id = field.text().await.ok().filter(|v| !v.trim().is_empty());
            }
            _ => {}
        }
    }

    let file_bytes =
        file_bytes.ok_or_else(|| AppError::Validation("missing 'file' field".to_string()))?;

    let text = extract_text(&file_name, &file_bytes)?;
    let fields = extract(&text);

    let resume_id = insert_resume(&state.db, user_id.as_deref(), &file_name, &text, &fields).await?;
    info!(
        "stored resume {resume_id} ({file_name}): {} skills, {} education entries",
        fields.skills.len(),
        fields.education.len()
    );

    Ok(Json(UploadResumeResponse {
        resume_id,
        summary: summarize(&fields),
        skills_detected: fields.skills,
    }))
}

/// Pulls plain text from the upload. PDFs go through the PDF extractor;
/// anything else is treated as UTF-8 text.
fn extract_text(file_name: &str, data: &[u8]) -> Result<String, AppError> {
    let is_pdf = file_name.to_lowercase().ends_with(".pdf") || data.starts_with(b"%PDF");
    if is_pdf {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::UnprocessableEntity(format!("could not read PDF: {e}")))
    } else {
        Ok(String::from_utf8_lossy(data).into_owned())
    }
}

fn summarize(fields: &ResumeFields) -> String {
    format!(
        "Detected {} skills and {} education entries; experience: {}.",
        fields.skills.len(),
        fields.education.len(),
        fields.experience_years
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::extractor::NOT_SPECIFIED;

    #[test]
    fn test_plain_text_upload_is_passed_through() {
        let text = extract_text("resume.txt", b"Python developer").unwrap();
        assert_eq!(text, "Python developer");
    }

    #[test]
    fn test_summary_wording() {
        let fields = ResumeFields {
            skills: vec!["python".to_string(), "sql".to_string()],
            education: vec!["B.Tech 2016".to_string()],
            experience_years: NOT_SPECIFIED.to_string(),
        };
        assert_eq!(
            summarize(&fields),
            "Detected 2 skills and 1 education entries; experience: Not specified."
        );
    }
}
