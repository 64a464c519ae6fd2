use crate::cli::commands::scrape::report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ingest::IngestLogic;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::scrape::import::load_file;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, source } = cmd {
        let path = expand_tilde(file);
        let (jobs, dropped) = load_file(&path, source)?;

        let mut pool = open_db(&cfg.database)?;
        let outcome = IngestLogic::import(&mut pool, jobs, dropped, file)?;
        report(&outcome);
    }

    Ok(())
}
