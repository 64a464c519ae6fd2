//! Browsing filters applied to the stored postings.

use crate::models::{JobPosting, JobStatus, job::city_of};
use crate::utils::date::parse_posted_date;
use chrono::{Duration, NaiveDate};
use clap::ValueEnum;
use std::collections::BTreeSet;

/// Publication date windows offered when browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DateWindow {
    Today,
    #[value(name = "3d")]
    Last3Days,
    #[value(name = "7d")]
    Last7Days,
    #[value(name = "30d")]
    Last30Days,
}

impl DateWindow {
    pub fn days(&self) -> i64 {
        match self {
            DateWindow::Today => 0,
            DateWindow::Last3Days => 3,
            DateWindow::Last7Days => 7,
            DateWindow::Last30Days => 30,
        }
    }

    /// `today` is the reference day, passed in so the window is testable.
    /// The day exactly N days back is outside the window.
    pub fn contains(&self, date_posted: &str, today: NaiveDate) -> bool {
        match self {
            DateWindow::Today => date_posted.trim() == today.format("%Y-%m-%d").to_string(),
            other => match parse_posted_date(date_posted) {
                Some(d) => d > today - Duration::days(other.days()),
                None => false,
            },
        }
    }
}

/// Conjunction of optional predicates; an empty filter keeps everything.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    pub status: Option<JobStatus>,
    pub company: Option<String>,
    pub city: Option<String>,
    pub source: Option<String>,
    pub date: Option<DateWindow>,
    pub job_type: Option<String>,
    pub keyword: Option<String>,
    pub not_applied_only: bool,
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn text_matches(job: &JobPosting, needle: &Option<String>) -> bool {
    match needle.as_deref().map(str::trim) {
        None | Some("") => true,
        Some(n) => {
            let n = n.to_lowercase();
            contains_ci(&job.title, &n) || contains_ci(&job.description, &n)
        }
    }
}

impl JobFilter {
    pub fn matches(&self, job: &JobPosting, today: NaiveDate) -> bool {
        if let Some(status) = self.status
            && job.status != status
        {
            return false;
        }
        if let Some(company) = &self.company
            && &job.company != company
        {
            return false;
        }
        if let Some(city) = &self.city
            && !job.location.starts_with(city.as_str())
        {
            return false;
        }
        if let Some(source) = &self.source
            && &job.source != source
        {
            return false;
        }
        if let Some(window) = self.date
            && !window.contains(&job.date_posted, today)
        {
            return false;
        }
        if !text_matches(job, &self.job_type) || !text_matches(job, &self.keyword) {
            return false;
        }
        if self.not_applied_only && job.status != JobStatus::NotApplied {
            return false;
        }
        true
    }

    /// Keep the matching jobs, preserving order.
    pub fn apply(&self, jobs: Vec<JobPosting>, today: NaiveDate) -> Vec<JobPosting> {
        jobs.into_iter().filter(|j| self.matches(j, today)).collect()
    }
}

/// Distinct values available for the exact-match filters.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Facets {
    pub companies: Vec<String>,
    pub cities: Vec<String>,
    pub sources: Vec<String>,
}

impl Facets {
    pub fn from_jobs(jobs: &[JobPosting]) -> Self {
        let mut companies = BTreeSet::new();
        let mut cities = BTreeSet::new();
        let mut sources = BTreeSet::new();

        for job in jobs {
            if !job.company.is_empty() {
                companies.insert(job.company.clone());
            }
            if let Some(city) = city_of(&job.location) {
                cities.insert(city.to_string());
            }
            if !job.source.is_empty() {
                sources.insert(job.source.clone());
            }
        }

        Self {
            companies: companies.into_iter().collect(),
            cities: cities.into_iter().collect(),
            sources: sources.into_iter().collect(),
        }
    }
}
