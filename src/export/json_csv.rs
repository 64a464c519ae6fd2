// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{JobExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(jobs: &[JobExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(jobs)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", jobs.len(), path);
    Ok(())
}

/// Export CSV, header row derived from the struct fields.
pub(crate) fn export_csv(jobs: &[JobExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for item in jobs {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", jobs.len(), path);
    Ok(())
}
