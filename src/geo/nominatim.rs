use crate::config::GeoConfig;
use crate::errors::{AppError, AppResult};
use crate::models::job::city_of;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::cell::Cell;
use std::thread;
use std::time::{Duration, Instant};

/// Nominatim usage policy: at most one request per second.
const MIN_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Deserialize)]
struct Place {
    display_name: String,
}

/// Free-text query for a company in the city of a job location.
/// `None` when either part is missing.
pub fn build_address_query(company: &str, location: &str, country: &str) -> Option<String> {
    let company = company.trim();
    if company.is_empty() {
        return None;
    }
    let city = city_of(location)?;

    if country.trim().is_empty() {
        Some(format!("{company}, {city}"))
    } else {
        Some(format!("{company}, {city}, {}", country.trim()))
    }
}

pub struct NominatimClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    country: String,
    last_request: Cell<Option<Instant>>,
}

impl NominatimClient {
    pub fn new(cfg: &GeoConfig) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(cfg.user_agent.clone())
            .timeout(Duration::from_secs(20))
            .build()
            .map_err(|e| AppError::Geo(e.to_string()))?;

        Ok(Self {
            client,
            base_url: cfg.nominatim_url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
            country: cfg.country.clone(),
            last_request: Cell::new(None),
        })
    }

    fn throttle(&self) {
        if let Some(last) = self.last_request.get() {
            let elapsed = last.elapsed();
            if elapsed < MIN_INTERVAL {
                thread::sleep(MIN_INTERVAL - elapsed);
            }
        }
        self.last_request.set(Some(Instant::now()));
    }

    /// Raw search: first match's `display_name`, if any.
    pub fn search(&self, query: &str) -> AppResult<Option<String>> {
        self.throttle();

        let url = format!("{}/search", self.base_url);
        let mut params = vec![
            ("q", query.to_string()),
            ("format", "json".to_string()),
            ("addressdetails", "1".to_string()),
            ("limit", "1".to_string()),
        ];
        if let Some(key) = &self.api_key {
            params.push(("key", key.clone()));
        }

        let resp = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .map_err(|e| AppError::Geo(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Geo(format!("Nominatim returned status {}", status)));
        }

        let places: Vec<Place> = resp.json().map_err(|e| AppError::Geo(e.to_string()))?;
        Ok(places.into_iter().next().map(|p| p.display_name))
    }

    /// Full address of `company` near `location`. Lookup failures are logged
    /// and reported as "not found".
    pub fn lookup(&self, company: &str, location: &str) -> Option<String> {
        let query = build_address_query(company, location, &self.country)?;

        match self.search(&query) {
            Ok(found) => {
                tracing::debug!(%query, found = found.is_some(), "address lookup");
                found
            }
            Err(e) => {
                tracing::warn!(%query, error = %e, "address lookup failed");
                None
            }
        }
    }
}
