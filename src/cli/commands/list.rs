use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::Facets;
use crate::core::listing::ListLogic;
use crate::db::initialize::open_db;
use crate::db::queries::load_jobs;
use crate::errors::AppResult;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        filters,
        details,
        facets,
    } = cmd
    {
        let filter = filters.to_filter()?;
        let mut pool = open_db(&cfg.database)?;
        let all = load_jobs(&mut pool)?;

        if *facets {
            // choices are computed on the whole store, like the filter dropdowns
            ListLogic::print_facets(&Facets::from_jobs(&all));
            println!();
        }

        let jobs = filter.apply(all, date::today());
        ListLogic::print(&jobs, *details, cfg.description_preview);
    }
    Ok(())
}
