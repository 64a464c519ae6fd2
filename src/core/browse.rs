use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{require_job, update_address, update_status};
use crate::errors::{AppError, AppResult};
use crate::geo::{NominatimClient, RouteClient, TravelTime};
use crate::models::{JobPosting, JobStatus};
use std::process::Command;

pub struct BrowseLogic;

impl BrowseLogic {
    /// Change the application status of a job; returns the previous one.
    pub fn set_status(pool: &mut DbPool, id: i64, status: JobStatus) -> AppResult<JobStatus> {
        let job = require_job(pool, id)?;
        update_status(pool, id, status)?;

        ttlog_quiet(
            &pool.conn,
            "status",
            &format!("job #{id}"),
            &format!("{} → {}", job.status.to_db_str(), status.to_db_str()),
        );
        Ok(job.status)
    }

    /// Cached address of the job's company, looked up and stored when missing.
    pub fn resolve_address(
        pool: &mut DbPool,
        job: &JobPosting,
        geocoder: &NominatimClient,
    ) -> AppResult<Option<String>> {
        if let Some(address) = &job.address {
            return Ok(Some(address.clone()));
        }

        let found = geocoder.lookup(&job.company, &job.location);
        if let Some(address) = &found {
            update_address(pool, job.id, address)?;
            ttlog_quiet(&pool.conn, "address", &format!("job #{}", job.id), address);
        }
        Ok(found)
    }

    /// Driving time from `from` to the company of job `id`.
    pub fn travel_time(
        pool: &mut DbPool,
        cfg: &Config,
        id: i64,
        from: &str,
    ) -> AppResult<Option<TravelTime>> {
        let router = RouteClient::new(&cfg.geo)?.ok_or_else(|| {
            AppError::Config("geo.ors_api_key is not set in the configuration".into())
        })?;

        let job = require_job(pool, id)?;
        let geocoder = NominatimClient::new(&cfg.geo)?;

        // fall back to the bare location when the company cannot be found
        let destination = match Self::resolve_address(pool, &job, &geocoder)? {
            Some(address) => address,
            None => job.location.clone(),
        };

        Ok(router.travel_time(from, &destination))
    }

    /// Command used to open URLs: `$BROWSER`, else the platform opener.
    pub fn browser_command() -> (String, Vec<String>) {
        if let Ok(browser) = std::env::var("BROWSER")
            && !browser.trim().is_empty()
        {
            return (browser, Vec::new());
        }

        if cfg!(target_os = "windows") {
            (
                "cmd".to_string(),
                vec!["/C".to_string(), "start".to_string(), String::new()],
            )
        } else if cfg!(target_os = "macos") {
            ("open".to_string(), Vec::new())
        } else {
            ("xdg-open".to_string(), Vec::new())
        }
    }

    pub fn open_in_browser(url: &str) -> AppResult<()> {
        if url.trim().is_empty() {
            return Err(AppError::Other("job has no URL".into()));
        }

        let (program, mut args) = Self::browser_command();
        args.push(url.to_string());

        let status = Command::new(&program).args(&args).status()?;
        if !status.success() {
            return Err(AppError::Other(format!(
                "'{}' exited with {}",
                program, status
            )));
        }
        Ok(())
    }
}
