//! `show`, `status`, `open` and `route`: commands acting on a single job.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::browse::BrowseLogic;
use crate::core::listing::ListLogic;
use crate::db::initialize::open_db;
use crate::db::queries::require_job;
use crate::errors::{AppError, AppResult};
use crate::geo::NominatimClient;
use crate::models::JobStatus;
use crate::ui::messages::{field, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = open_db(&cfg.database)?;

    match cmd {
        Commands::Show { id, address } => {
            let job = require_job(&mut pool, *id)?;
            ListLogic::print_details(&job, cfg.description_preview);

            if *address && job.address.is_none() {
                let geocoder = NominatimClient::new(&cfg.geo)?;
                match BrowseLogic::resolve_address(&mut pool, &job, &geocoder)? {
                    Some(found) => field("Address", found),
                    None => field("Address", "Not found"),
                }
            }
        }

        Commands::Status { id, status } => {
            let new_status =
                JobStatus::from_code(status).ok_or_else(|| AppError::InvalidStatus(status.clone()))?;
            let previous = BrowseLogic::set_status(&mut pool, *id, new_status)?;

            if previous == new_status {
                info(format!("Job #{} is already '{}'.", id, new_status.to_db_str()));
            } else {
                success(format!(
                    "Job #{}: {} → {}",
                    id,
                    previous.to_db_str(),
                    new_status.to_db_str()
                ));
            }
        }

        Commands::Open { id } => {
            let job = require_job(&mut pool, *id)?;
            info(format!("Opening {}", job.url));
            BrowseLogic::open_in_browser(&job.url)?;
        }

        Commands::Route { id, from } => {
            match BrowseLogic::travel_time(&mut pool, cfg, *id, from)? {
                Some(t) => success(format!("{} min by car ({} km)", t.minutes, t.km)),
                None => warning("No route found."),
            }
        }

        _ => {}
    }

    Ok(())
}
