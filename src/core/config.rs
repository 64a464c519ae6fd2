use crate::config::{Config, SearchProfile};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Default editor based on the environment and platform.
    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open the config file in `editor`, falling back to the default editor.
    pub fn edit(editor: &Option<String>) -> AppResult<()> {
        let path = Config::config_file();
        let default_editor = Self::default_editor();
        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(&path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        let status = Command::new(&default_editor)
            .arg(&path)
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;

        if !status.success() {
            return Err(AppError::Config(format!(
                "failed to edit configuration file using '{}'",
                default_editor
            )));
        }

        success(format!(
            "Configuration file edited successfully using fallback '{}'",
            default_editor
        ));
        Ok(())
    }

    /// Write the search profile to a JSON file.
    pub fn export_profile(cfg: &Config, file: &str) -> AppResult<()> {
        let path = expand_tilde(file);
        cfg.search.export_json(&path)?;
        success(format!("Search profile exported to {}", path.display()));
        Ok(())
    }

    /// Replace the search profile with the content of a JSON file and save.
    pub fn import_profile(cfg: &mut Config, file: &str) -> AppResult<()> {
        let path = expand_tilde(file);
        cfg.search = SearchProfile::import_json(&path)?;
        cfg.save()?;
        success(format!("Search profile imported from {}", path.display()));
        Ok(())
    }

    /// Restore the default search profile and save.
    pub fn reset_profile(cfg: &mut Config) -> AppResult<()> {
        cfg.search = SearchProfile::default();
        cfg.save()?;
        success("Search profile reset to defaults.");
        Ok(())
    }
}
