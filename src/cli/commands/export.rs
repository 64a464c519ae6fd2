use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        filters,
    } = cmd
    {
        let filter = filters.to_filter()?;
        let mut pool = open_db(&cfg.database)?;

        tracing::debug!(format = format.as_str(), file, "exporting jobs");
        ExportLogic::export(&mut pool, *format, file, &filter, *force)?;
    }

    Ok(())
}
