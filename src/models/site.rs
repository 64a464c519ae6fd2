use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Job boards reachable through the scraping service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Site {
    Indeed,
    #[value(name = "linkedin")]
    LinkedIn,
    Google,
}

impl Site {
    pub const ALL: [Site; 3] = [Site::Indeed, Site::LinkedIn, Site::Google];

    /// Provenance tag stored in the `source` column.
    pub fn tag(&self) -> &'static str {
        match self {
            Site::Indeed => "Indeed",
            Site::LinkedIn => "LinkedIn",
            Site::Google => "Google",
        }
    }

    /// Name understood by the scraping service (`site_name` parameter).
    pub fn api_name(&self) -> &'static str {
        match self {
            Site::Indeed => "indeed",
            Site::LinkedIn => "linkedin",
            Site::Google => "google",
        }
    }
}
