use crate::config::SearchProfile;
use crate::models::{NewJob, Site};
use crate::scrape::types::SearchQuery;
use crate::scrape::JobSource;
use std::collections::HashSet;

/// A source that failed for one keyword. The run goes on without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub site: Site,
    pub keyword: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScrapeReport {
    pub jobs: Vec<NewJob>,
    pub failures: Vec<SourceFailure>,
    /// Records the sources returned but that had no URL.
    pub dropped: usize,
}

/// Query every source for every keyword of the profile.
///
/// Order is keyword-major, then sources in the given order. A failing source
/// is recorded in the report and skipped.
pub fn scrape_all(sources: &[Box<dyn JobSource>], profile: &SearchProfile) -> ScrapeReport {
    let mut report = ScrapeReport::default();

    for keyword in profile.active_keywords() {
        for source in sources {
            let site = source.site();
            let query = SearchQuery::new(profile, keyword, site);

            match source.fetch(&query) {
                Ok(records) => {
                    let total = records.len();
                    let mut kept = 0;
                    for record in records {
                        if let Some(job) = record.normalize(site.tag()) {
                            report.jobs.push(job);
                            kept += 1;
                        }
                    }
                    report.dropped += total - kept;
                }
                Err(e) => {
                    tracing::warn!(site = site.tag(), keyword, error = %e, "source failed");
                    report.failures.push(SourceFailure {
                        site,
                        keyword: keyword.to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }
    }

    report
}

/// Keep the first posting of each URL.
pub fn dedupe_by_url(jobs: Vec<NewJob>) -> Vec<NewJob> {
    let mut seen = HashSet::new();
    jobs.into_iter()
        .filter(|job| seen.insert(job.url.clone()))
        .collect()
}
