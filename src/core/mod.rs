pub mod browse;
pub mod config;
pub mod filter;
pub mod ingest;
pub mod listing;
pub mod log;
