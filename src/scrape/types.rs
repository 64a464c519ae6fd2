use crate::config::SearchProfile;
use crate::models::{NewJob, Site};
use serde::{Deserialize, Serialize};

/// One search sent to a source: a keyword on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub location: String,
    pub country: String,
    pub distance: u32,
    pub results_wanted: u32,
    pub hours_old: u32,
    pub description_format: String,
    /// LinkedIn needs one extra request per posting for the description.
    pub fetch_full_description: bool,
}

impl SearchQuery {
    pub fn new(profile: &SearchProfile, keyword: &str, site: Site) -> Self {
        Self {
            keyword: keyword.to_string(),
            location: profile.location.clone(),
            country: profile.country.clone(),
            distance: profile.distance,
            results_wanted: profile.results_per_keyword,
            hours_old: profile.hours_old(),
            description_format: "markdown".to_string(),
            fetch_full_description: site != Site::LinkedIn,
        }
    }
}

/// A posting as returned by the scraping service. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedJob {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_url: Option<String>,
    pub date_posted: Option<String>,
    pub description: Option<String>,
    pub site: Option<String>,
}

fn clean(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

impl ScrapedJob {
    /// Convert to a [`NewJob`] tagged with `source`.
    /// Postings without a URL cannot be deduplicated and are dropped.
    pub fn normalize(self, source: &str) -> Option<NewJob> {
        let url = clean(self.job_url);
        if url.is_empty() {
            return None;
        }

        Some(NewJob {
            title: clean(self.title),
            company: clean(self.company),
            location: clean(self.location),
            url,
            date_posted: date_part(&clean(self.date_posted)),
            description: clean(self.description),
            source: source.to_string(),
        })
    }
}

/// Keep `YYYY-MM-DD` out of a date or datetime string.
fn date_part(raw: &str) -> String {
    match raw.get(..10) {
        Some(head) if chrono::NaiveDate::parse_from_str(head, "%Y-%m-%d").is_ok() => {
            head.to_string()
        }
        _ => raw.to_string(),
    }
}

/// Envelope returned by `GET /api/v1/search_jobs`. `jobs` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub count: Option<u64>,
    pub jobs: Vec<ScrapedJob>,
}
