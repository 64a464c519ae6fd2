use crate::config::ScraperConfig;
use crate::models::Site;
use crate::scrape::error::{Result, ScrapeError};
use crate::scrape::types::{ScrapedJob, SearchQuery, SearchResponse};
use crate::scrape::JobSource;
use reqwest::blocking::Client;
use std::time::Duration;

const SEARCH_PATH: &str = "/api/v1/search_jobs";

/// One board queried through a JobSpy-compatible REST service.
pub struct JobSpyApiSource {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    site: Site,
}

impl JobSpyApiSource {
    pub fn new(cfg: &ScraperConfig, site: Site) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
            site,
        })
    }

    /// One source per configured board, sharing the same settings.
    pub fn for_sites(cfg: &ScraperConfig, sites: &[Site]) -> Result<Vec<Box<dyn JobSource>>> {
        let mut out: Vec<Box<dyn JobSource>> = Vec::with_capacity(sites.len());
        for site in sites {
            out.push(Box::new(Self::new(cfg, *site)?));
        }
        Ok(out)
    }

    /// Query string sent for a search.
    pub fn query_params(&self, query: &SearchQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("site_name", self.site.api_name().to_string()),
            ("search_term", query.keyword.clone()),
            ("country_indeed", query.country.to_lowercase()),
            ("distance", query.distance.to_string()),
            ("results_wanted", query.results_wanted.to_string()),
            ("hours_old", query.hours_old.to_string()),
            ("description_format", query.description_format.clone()),
        ];

        if !query.location.trim().is_empty() {
            params.push(("location", query.location.clone()));
        }
        if self.site == Site::LinkedIn {
            params.push((
                "linkedin_fetch_description",
                query.fetch_full_description.to_string(),
            ));
        }
        params
    }
}

impl JobSource for JobSpyApiSource {
    fn site(&self) -> Site {
        self.site
    }

    fn fetch(&self, query: &SearchQuery) -> Result<Vec<ScrapedJob>> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);
        tracing::debug!(site = self.site.api_name(), keyword = %query.keyword, %url, "querying scraping service");

        let mut req = self.client.get(&url).query(&self.query_params(query));
        if let Some(key) = &self.api_key {
            req = req.header("x-api-key", key);
        }

        let resp = req.send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(ScrapeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text()?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        tracing::info!(
            site = self.site.api_name(),
            keyword = %query.keyword,
            count = parsed.jobs.len(),
            "fetched postings"
        );

        Ok(parsed.jobs)
    }
}
