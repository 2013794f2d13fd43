//! Job matching engine.
//!
//! Merges two sources into one ranked, size-bounded list: internal listings
//! matched against the user's latest resume skills ("personalized"), then
//! external provider results. Personalized listings always precede external
//! ones, and the combined list is truncated to `MAX_RESULTS` before rendering.

use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::PgPool;
use tracing::warn;

use crate::models::job::JobListing;
use crate::providers::error::ProviderError;
use crate::providers::jsearch::JobSearchProvider;
use crate::resume::store::latest_resume_for_user;

/// Upper bound on the merged listing count.
pub const MAX_RESULTS: usize = 5;
/// Upper bound on personalized (internal) listings.
pub const MAX_PERSONALIZED: i64 = 3;

/// Outcome of a job match. Absence of jobs and a missing provider credential
/// are normal outcomes, not failures.
#[derive(Debug)]
pub enum JobMatchOutcome {
    Listings(Vec<JobListing>),
    NoResults,
    MissingCredential,
}

/// Runs the full match: personalized lookup, external search, merge, truncate.
///
/// Store failures during the personalized step degrade silently to external
/// results only. A missing provider credential is only surfaced when there is
/// nothing personalized to show instead.
pub async fn match_jobs(
    pool: &PgPool,
    provider: &dyn JobSearchProvider,
    query: &str,
    user_id: Option<&str>,
) -> JobMatchOutcome {
    let personalized = match user_id {
        Some(uid) => personalized_listings(pool, uid).await,
        None => Vec::new(),
    };

    let external: Vec<JobListing> = match provider.search(&normalize_job_query(query), 1).await {
        Ok(jobs) => jobs.into_iter().map(JobListing::from).collect(),
        Err(ProviderError::MissingCredential) if personalized.is_empty() => {
            return JobMatchOutcome::MissingCredential;
        }
        Err(e) => {
            warn!("external job search failed: {e}");
            Vec::new()
        }
    };

    let merged = merge_listings(personalized, external);
    if merged.is_empty() {
        JobMatchOutcome::NoResults
    } else {
        JobMatchOutcome::Listings(merged)
    }
}

/// Internal listings matched against the user's most recent resume skills.
/// Every failure path here is a silent degrade to empty.
async fn personalized_listings(pool: &PgPool, user_id: &str) -> Vec<JobListing> {
    let resume = match latest_resume_for_user(pool, user_id).await {
        Ok(Some(resume)) => resume,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("resume lookup failed for user {user_id}: {e}");
            return Vec::new();
        }
    };

    if resume.skills_detected.is_empty() {
        return Vec::new();
    }

    match crate::jobs::store::find_jobs_matching_skills(
        pool,
        &resume.skills_detected,
        MAX_PERSONALIZED,
    )
    .await
    {
        Ok(rows) => rows.into_iter().map(JobListing::from).collect(),
        Err(e) => {
            warn!("internal job match failed for user {user_id}: {e}");
            Vec::new()
        }
    }
}

/// Personalized listings first, then external, truncated to `MAX_RESULTS`.
pub fn merge_listings(
    personalized: Vec<JobListing>,
    external: Vec<JobListing>,
) -> Vec<JobListing> {
    personalized
        .into_iter()
        .chain(external)
        .take(MAX_RESULTS)
        .collect()
}

/// Rewrites "find X jobs in Y" phrases to "X jobs in Y"; anything else passes
/// through unchanged.
pub fn normalize_job_query(message: &str) -> String {
    static FIND_JOBS_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?i)find (.+?) jobs in (.+)").expect("valid job query pattern"));

    match FIND_JOBS_RE.captures(message) {
        Some(caps) => format!("{} jobs in {}", caps[1].trim(), caps[2].trim()),
        None => message.to_string(),
    }
}

/// Renders listings for a chat reply, one per paragraph.
pub fn render_listings(listings: &[JobListing]) -> String {
    listings
        .iter()
        .map(JobListing::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobSource;

    fn listing(title: &str, source: JobSource) -> JobListing {
        JobListing {
            title: title.to_string(),
            employer: "Acme".to_string(),
            location: "Remote".to_string(),
            source,
        }
    }

    #[test]
    fn test_merge_personalized_first() {
        let personalized = vec![listing("Python Developer", JobSource::Internal)];
        let external = vec![listing("Data Analyst", JobSource::External)];
        let merged = merge_listings(personalized, external);
        assert_eq!(merged[0].title, "Python Developer");
        assert_eq!(merged[0].source, JobSource::Internal);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_truncates_to_five() {
        let personalized: Vec<_> = (0..3)
            .map(|i| listing(&format!("internal {i}"), JobSource::Internal))
            .collect();
        let external: Vec<_> = (0..6)
            .map(|i| listing(&format!("external {i}"), JobSource::External))
            .collect();
        let merged = merge_listings(personalized, external);
        assert_eq!(merged.len(), MAX_RESULTS);
        assert!(merged[..3].iter().all(|l| l.source == JobSource::Internal));
        assert!(merged[3..].iter().all(|l| l.source == JobSource::External));
    }

    #[test]
    fn test_merge_empty_both_sides() {
        assert!(merge_listings(Vec::new(), Vec::new()).is_empty());
    }

    #[test]
    fn test_normalize_find_jobs_phrase() {
        assert_eq!(
            normalize_job_query("find python jobs in Seattle"),
            "python jobs in Seattle"
        );
        assert_eq!(
            normalize_job_query("Find Data Engineer jobs in New Delhi"),
            "Data Engineer jobs in New Delhi"
        );
    }

    #[test]
    fn test_normalize_passthrough() {
        assert_eq!(normalize_job_query("remote rust roles"), "remote rust roles");
    }

    #[test]
    fn test_render_listings_paragraphs() {
        let listings = vec![
            listing("Python Developer", JobSource::Internal),
            listing("Data Analyst", JobSource::External),
        ];
        let text = render_listings(&listings);
        assert_eq!(
            text,
            "Python Developer at Acme (Remote)\n\nData Analyst at Acme (Remote)"
        );
    }
}
