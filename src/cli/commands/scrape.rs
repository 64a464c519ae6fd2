use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ingest::{IngestLogic, IngestOutcome};
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::scrape::jobspy::JobSpyApiSource;
use crate::ui::messages::{info, success, warning};

/// Fetch new postings from the configured boards.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scrape {
        keywords,
        location,
        country,
        distance,
        results,
        days,
        sites,
        save,
    } = cmd
    {
        //
        // 1. Profile = stored profile + command line overrides
        //
        let mut profile = cfg.search.clone();
        if !keywords.is_empty() {
            profile.keywords = keywords.clone();
        }
        if let Some(l) = location {
            profile.location = l.clone();
        }
        if let Some(c) = country {
            profile.country = c.to_uppercase();
        }
        if let Some(d) = distance {
            profile.distance = *d;
        }
        if let Some(r) = results {
            profile.results_per_keyword = *r;
        }
        if let Some(d) = days {
            profile.days_old = *d;
        }
        profile.validate_for_scrape()?;

        let sites = if sites.is_empty() { cfg.sites.clone() } else { sites.clone() };

        //
        // 2. Optionally persist the overrides
        //
        if *save {
            let mut stored = Config::load()?;
            stored.search = profile.clone();
            stored.save()?;
            success("Search profile saved.");
        }

        //
        // 3. Scrape and store
        //
        let sources = JobSpyApiSource::for_sites(&cfg.scraper, &sites)?;
        let mut pool = open_db(&cfg.database)?;

        info(format!(
            "Scraping {} keyword(s) on {} board(s)…",
            profile.active_keywords().count(),
            sites.len()
        ));

        let outcome = IngestLogic::scrape(&mut pool, &sources, &profile)?;
        report(&outcome);
    }

    Ok(())
}

/// Print the result of an ingestion run.
pub fn report(outcome: &IngestOutcome) {
    for f in &outcome.failures {
        warning(format!("{} failed for '{}': {}", f.site.tag(), f.keyword, f.error));
    }

    if outcome.dropped > 0 {
        warning(format!("{} posting(s) without URL skipped.", outcome.dropped));
    }

    if outcome.inserted > 0 {
        success(format!("{} new jobs added!", outcome.inserted));
    } else {
        info("No new jobs found.");
    }
}
