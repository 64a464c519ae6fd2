use crate::models::job_status::JobStatus;
use serde::Serialize;

/// A stored posting, one row of the `jobs` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    pub date_posted: String,
    pub description: String,
    pub status: JobStatus,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl JobPosting {
    /// One-line summary used as a heading in listings.
    pub fn headline(&self) -> String {
        format!(
            "{} | {} | {} | {}",
            self.title, self.company, self.location, self.date_posted
        )
    }
}

/// A normalized record coming out of a source, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    pub date_posted: String,
    pub description: String,
    pub source: String,
}

/// First comma separated segment of a location ("Lyon, Auvergne…" → "Lyon").
pub fn city_of(location: &str) -> Option<&str> {
    let city = location.split(',').next()?.trim();
    if city.is_empty() { None } else { Some(city) }
}
