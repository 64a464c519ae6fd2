use crate::errors::{AppError, AppResult};
use crate::models::Site;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod search; // use submodule at src/config/search.rs

pub use search::SearchProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub search: SearchProfile,
    #[serde(default = "default_sites")]
    pub sites: Vec<Site>,
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub geo: GeoConfig,
    #[serde(default = "default_description_preview")]
    pub description_preview: usize,
}

/// Where the JobSpy-compatible scraping service lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_key: None,
            timeout_secs: 60,
        }
    }
}

/// Address lookup (Nominatim) and travel time (OpenRouteService) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    pub nominatim_url: String,
    pub user_agent: String,
    pub api_key: Option<String>,
    pub country: String,
    pub ors_url: String,
    pub ors_api_key: Option<String>,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            nominatim_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: "JobFinderAI/1.0".to_string(),
            api_key: None,
            country: "France".to_string(),
            ors_url: "https://api.openrouteservice.org".to_string(),
            ors_api_key: None,
        }
    }
}

fn default_sites() -> Vec<Site> {
    Site::ALL.to_vec()
}
fn default_description_preview() -> usize {
    1000
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            search: SearchProfile::default(),
            sites: default_sites(),
            scraper: ScraperConfig::default(),
            geo: GeoConfig::default(),
            description_preview: default_description_preview(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rjobfinder`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rjobfinder")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rjobfinder.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rjobfinder.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Write the configuration back to its YAML file.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = crate::utils::path::expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            dir.join("rjobfinder.sqlite")
        };

        // keep the search profile of an existing config file
        let mut config = if Self::config_file().exists() {
            Self::load()?
        } else {
            Config::default()
        };
        config.database = db_path.to_string_lossy().to_string();

        // Write config file
        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(config)
    }
}
