use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        export,
        import,
        reset,
    } = cmd
    {
        if let Some(file) = export {
            ConfigLogic::export_profile(cfg, file)?;
        }

        // writes go to the stored config, not to the one overridden by --db
        if *reset || import.is_some() {
            let mut stored = Config::load()?;
            if *reset {
                ConfigLogic::reset_profile(&mut stored)?;
            }
            if let Some(file) = import {
                ConfigLogic::import_profile(&mut stored, file)?;
            }
        }

        if *print_config {
            let current = if *reset || import.is_some() {
                let mut reloaded = Config::load()?;
                reloaded.database = cfg.database.clone();
                reloaded
            } else {
                cfg.clone()
            };
            ConfigLogic::print(&current)?;
        }

        if *edit_config {
            ConfigLogic::edit(editor)?;
        }
    }

    Ok(())
}
