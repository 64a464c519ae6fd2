use crate::config::SearchProfile;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::insert_jobs;
use crate::errors::AppResult;
use crate::models::NewJob;
use crate::scrape::{JobSource, SourceFailure, dedupe_by_url, scrape_all};

/// What a scrape or import did to the store.
#[derive(Debug, Default)]
pub struct IngestOutcome {
    /// Postings returned by the sources, after normalization.
    pub fetched: usize,
    /// Records dropped because they had no URL.
    pub dropped: usize,
    /// Distinct URLs in the batch.
    pub unique: usize,
    /// Rows actually added to the store.
    pub inserted: usize,
    pub failures: Vec<SourceFailure>,
}

pub struct IngestLogic;

impl IngestLogic {
    /// Deduplicate a batch and insert what the store does not know yet.
    pub fn store(pool: &mut DbPool, jobs: Vec<NewJob>) -> AppResult<IngestOutcome> {
        let fetched = jobs.len();
        let unique_jobs = dedupe_by_url(jobs);
        let unique = unique_jobs.len();
        let inserted = insert_jobs(&mut pool.conn, &unique_jobs)?;

        tracing::info!(fetched, unique, inserted, "stored batch");

        Ok(IngestOutcome {
            fetched,
            unique,
            inserted,
            ..Default::default()
        })
    }

    /// Full pipeline: query all sources, normalize, deduplicate, persist.
    pub fn scrape(
        pool: &mut DbPool,
        sources: &[Box<dyn JobSource>],
        profile: &SearchProfile,
    ) -> AppResult<IngestOutcome> {
        profile.validate_for_scrape()?;

        let report = scrape_all(sources, profile);
        let mut outcome = Self::store(pool, report.jobs)?;
        outcome.dropped = report.dropped;
        outcome.failures = report.failures;

        let keywords: Vec<&str> = profile.active_keywords().collect();
        ttlog_quiet(
            &pool.conn,
            "scrape",
            &keywords.join(", "),
            &format!(
                "{} fetched, {} new, {} source failure(s)",
                outcome.fetched,
                outcome.inserted,
                outcome.failures.len()
            ),
        );

        Ok(outcome)
    }

    /// Insert jobs read from a file.
    pub fn import(
        pool: &mut DbPool,
        jobs: Vec<NewJob>,
        dropped: usize,
        file: &str,
    ) -> AppResult<IngestOutcome> {
        let mut outcome = Self::store(pool, jobs)?;
        outcome.dropped = dropped;

        ttlog_quiet(
            &pool.conn,
            "import",
            file,
            &format!("{} read, {} new", outcome.fetched, outcome.inserted),
        );

        Ok(outcome)
    }
}
