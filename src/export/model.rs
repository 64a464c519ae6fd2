// src/export/model.rs

use crate::models::JobPosting;
use serde::Serialize;

/// Flat record written by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct JobExport {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    pub date_posted: String,
    pub status: String,
    pub source: String,
    pub address: String,
    pub description: String,
}

impl From<&JobPosting> for JobExport {
    fn from(job: &JobPosting) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            url: job.url.clone(),
            date_posted: job.date_posted.clone(),
            status: job.status.to_db_str().to_string(),
            source: job.source.clone(),
            address: job.address.clone().unwrap_or_default(),
            description: job.description.clone(),
        }
    }
}
