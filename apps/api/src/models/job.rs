use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const LOCATION_NOT_SPECIFIED: &str = "Location not specified";

/// Where a listing came from. Internal listings are stored documents matched
/// against resume skills; external listings are transient provider results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobSource {
    Internal,
    External,
}

/// The one listing shape the rest of the engine works with. Internal and
/// external records are normalized into this at the boundary so rendering
/// never branches on field-name presence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub employer: String,
    pub location: String,
    pub source: JobSource,
}

impl JobListing {
    /// Renders a listing as `"<title> at <employer> (<location>)"`.
    pub fn render(&self) -> String {
        format!("{} at {} ({})", self.title, self.employer, self.location)
    }
}

/// A row from the internal `jobs` table.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub employer: String,
    pub location: Option<String>,
    pub description: Option<String>,
}

impl From<JobRow> for JobListing {
    fn from(row: JobRow) -> Self {
        JobListing {
            title: row.title,
            employer: row.employer,
            location: row
                .location
                .unwrap_or_else(|| LOCATION_NOT_SPECIFIED.to_string()),
            source: JobSource::Internal,
        }
    }
}

/// A job record as returned by the external search provider. Field names
/// differ between providers (`job_title` vs `title`, `employer_name` vs
/// `company`), so everything is aliased and optional here and defaulted when
/// normalized into a `JobListing`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalJob {
    #[serde(default, alias = "job_title")]
    pub title: Option<String>,
    #[serde(default, alias = "employer_name", alias = "company")]
    pub employer: Option<String>,
    #[serde(default, alias = "job_location")]
    pub location: Option<String>,
}

impl From<ExternalJob> for JobListing {
    fn from(job: ExternalJob) -> Self {
        JobListing {
            title: job.title.unwrap_or_else(|| "Untitled role".to_string()),
            employer: job
                .employer
                .unwrap_or_else(|| "Unknown employer".to_string()),
            location: job
                .location
                .unwrap_or_else(|| LOCATION_NOT_SPECIFIED.to_string()),
            source: JobSource::External,
        }
    }
}
