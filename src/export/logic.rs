// src/export/logic.rs

use crate::core::filter::JobFilter;
use crate::db::pool::DbPool;
use crate::db::queries::load_jobs;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::JobExport;
use crate::ui::messages::warning;
use crate::utils::{date, path::expand_tilde};

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the jobs matching `filter` to `file`.
    ///
    /// Returns the number of exported jobs; nothing is written when no job matches.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        filter: &JobFilter,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);
        let jobs = filter.apply(load_jobs(pool)?, date::today());

        if jobs.is_empty() {
            warning("No jobs match the selected filters, nothing exported.");
            return Ok(0);
        }

        // only ask about overwriting once there is something to write
        ensure_writable(&path, force)?;

        let rows: Vec<JobExport> = jobs.iter().map(JobExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(rows.len())
    }
}
