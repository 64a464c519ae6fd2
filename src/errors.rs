//! Unified application error type.
//! All modules (db, core, cli, scrape, geo) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::scrape::error::ScrapeError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No job found with id {0}")]
    JobNotFound(i64),

    #[error("Invalid search settings: {0}")]
    InvalidSearch(String),

    #[error("Invalid import file: {0}")]
    InvalidImport(String),

    // ---------------------------
    // Remote services
    // ---------------------------
    #[error("Scraping error: {0}")]
    Scrape(#[from] ScrapeError),

    #[error("Geocoding error: {0}")]
    Geo(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
