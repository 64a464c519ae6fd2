//! Offline ingestion from a JSON file in the scraping service format.

use crate::errors::{AppError, AppResult};
use crate::models::NewJob;
use crate::scrape::types::{ScrapedJob, SearchResponse};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum ImportFile {
    List(Vec<ScrapedJob>),
    Envelope(SearchResponse),
}

/// Parse either a bare array of postings or a `{ "count", "jobs" }` envelope.
/// Anything else (a single posting, an unrelated object) is rejected.
pub fn parse_records(content: &str) -> AppResult<Vec<ScrapedJob>> {
    let parsed: ImportFile = serde_json::from_str(content).map_err(|e| {
        AppError::InvalidImport(format!(
            "expected a list of postings or an object with a \"jobs\" array ({e})"
        ))
    })?;
    Ok(match parsed {
        ImportFile::List(jobs) => jobs,
        ImportFile::Envelope(resp) => resp.jobs,
    })
}

/// Read `path` and normalize its postings with the `source` tag.
/// Returns the jobs and the number of records dropped for lack of URL.
pub fn load_file(path: &Path, source: &str) -> AppResult<(Vec<NewJob>, usize)> {
    if source.trim().is_empty() {
        return Err(AppError::InvalidImport("source tag must not be empty".into()));
    }

    let content = fs::read_to_string(path)?;
    let records = parse_records(&content)?;
    let total = records.len();

    let jobs: Vec<NewJob> = records
        .into_iter()
        .filter_map(|r| r.normalize(source.trim()))
        .collect();
    let dropped = total - jobs.len();

    tracing::info!(file = %path.display(), total, dropped, "parsed import file");
    Ok((jobs, dropped))
}
