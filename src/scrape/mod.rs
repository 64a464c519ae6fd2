//! Job ingestion: query the boards, normalize what comes back, hand the result
//! to the store.
//!
//! The boards themselves are reached through a [`JobSource`]; the crate ships an
//! HTTP implementation talking to a JobSpy-compatible service
//! ([`jobspy::JobSpyApiSource`]) and a file reader for offline imports
//! ([`import`]).

pub mod error;
pub mod import;
pub mod jobspy;
pub mod pipeline;
pub mod types;

pub use error::ScrapeError;
pub use pipeline::{ScrapeReport, SourceFailure, dedupe_by_url, scrape_all};
pub use types::{ScrapedJob, SearchQuery};

use crate::models::Site;

/// Anything able to return postings for a search on one board.
pub trait JobSource {
    /// Board this source queries; also decides the provenance tag.
    fn site(&self) -> Site;

    fn fetch(&self, query: &SearchQuery) -> error::Result<Vec<ScrapedJob>>;
}
