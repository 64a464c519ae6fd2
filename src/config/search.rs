//! Search profile: what to look for and where.
//! Exported and imported as a standalone JSON document so profiles can be shared.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

pub const DISTANCE_RANGE: RangeInclusive<u32> = 1..=100;
pub const RESULTS_RANGE: RangeInclusive<u32> = 1..=50;
pub const DAYS_RANGE: RangeInclusive<u32> = 1..=30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchProfile {
    pub keywords: Vec<String>,
    pub location: String,
    pub country: String,
    /// Search radius in km
    pub distance: u32,
    pub results_per_keyword: u32,
    /// Only postings published in the last N days
    pub days_old: u32,
}

impl Default for SearchProfile {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            location: String::new(),
            country: "FRANCE".to_string(),
            distance: 30,
            results_per_keyword: 20,
            days_old: 7,
        }
    }
}

fn check_range(name: &str, value: u32, range: &RangeInclusive<u32>) -> AppResult<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(AppError::InvalidSearch(format!(
            "{} must be between {} and {} (got {})",
            name,
            range.start(),
            range.end(),
            value
        )))
    }
}

impl SearchProfile {
    /// Check numeric bounds and the country code.
    pub fn validate(&self) -> AppResult<()> {
        check_range("distance", self.distance, &DISTANCE_RANGE)?;
        check_range("results_per_keyword", self.results_per_keyword, &RESULTS_RANGE)?;
        check_range("days_old", self.days_old, &DAYS_RANGE)?;

        if self.country.trim().is_empty() {
            return Err(AppError::InvalidSearch("country must not be empty".into()));
        }
        Ok(())
    }

    /// Stricter check used before a scrape: at least one keyword is needed.
    pub fn validate_for_scrape(&self) -> AppResult<()> {
        self.validate()?;
        if self.active_keywords().next().is_none() {
            return Err(AppError::InvalidSearch(
                "no keywords configured (use --keyword or `config --import`)".into(),
            ));
        }
        Ok(())
    }

    /// Keywords with surrounding blanks removed, empty lines skipped.
    pub fn active_keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
    }

    /// The scraping service works in hours.
    pub fn hours_old(&self) -> u32 {
        self.days_old * 24
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn export_json(&self, path: &Path) -> AppResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read a profile from JSON; missing fields take their defaults.
    pub fn import_json(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let profile: SearchProfile = serde_json::from_str(&content)?;
        profile.validate()?;
        Ok(profile)
    }
}
