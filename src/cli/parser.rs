use crate::core::filter::{DateWindow, JobFilter};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::{JobStatus, Site};
use clap::{ArgAction, Args, Parser, Subcommand};

/// Command-line interface definition for rJobfinder
/// CLI application to collect job postings into SQLite and track applications
#[derive(Parser)]
#[command(
    name = "rjobfinder",
    version = env!("CARGO_PKG_VERSION"),
    about = "Collect job postings from several boards into SQLite, browse them and track your applications",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Browsing filters shared by `list` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    #[arg(long, help = "Filter by status: not-applied, applied, rejected, accepted")]
    pub status: Option<String>,

    #[arg(long, help = "Exact company name")]
    pub company: Option<String>,

    #[arg(long, help = "Location starting with this city")]
    pub city: Option<String>,

    #[arg(long, help = "Exact source tag (Indeed, LinkedIn, Google, …)")]
    pub source: Option<String>,

    #[arg(long, value_enum, help = "Publication date: today, 3d, 7d, 30d")]
    pub date: Option<DateWindow>,

    #[arg(
        long = "type",
        help = "Contract type searched in title or description (e.g. alternance, CDI)"
    )]
    pub job_type: Option<String>,

    #[arg(long, short = 'k', help = "Keyword searched in title or description")]
    pub keyword: Option<String>,

    #[arg(long = "not-applied", help = "Only jobs not applied to yet")]
    pub not_applied: bool,
}

impl FilterArgs {
    pub fn to_filter(&self) -> AppResult<JobFilter> {
        let status = match &self.status {
            Some(s) => Some(JobStatus::from_code(s).ok_or_else(|| AppError::InvalidStatus(s.clone()))?),
            None => None,
        };

        Ok(JobFilter {
            status,
            company: self.company.clone(),
            city: self.city.clone(),
            source: self.source.clone(),
            date: self.date,
            job_type: self.job_type.clone(),
            keyword: self.keyword.clone(),
            not_applied_only: self.not_applied,
        })
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file and the search profile
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,

        #[arg(long = "export", value_name = "FILE", help = "Export the search profile as JSON")]
        export: Option<String>,

        #[arg(long = "import", value_name = "FILE", help = "Import a search profile from JSON")]
        import: Option<String>,

        #[arg(long = "reset", help = "Reset the search profile to defaults")]
        reset: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Fetch new postings from the configured boards
    Scrape {
        #[arg(long = "keyword", short = 'k', help = "Search keyword (repeatable, overrides the profile)")]
        keywords: Vec<String>,

        #[arg(long, help = "Search location")]
        location: Option<String>,

        #[arg(long, help = "Country (e.g. FRANCE)")]
        country: Option<String>,

        #[arg(long, help = "Search radius in km (1-100)")]
        distance: Option<u32>,

        #[arg(long = "results", help = "Results wanted per keyword and board (1-50)")]
        results: Option<u32>,

        #[arg(long = "days", help = "Only postings published in the last N days (1-30)")]
        days: Option<u32>,

        #[arg(long = "site", value_enum, help = "Board to query (repeatable, overrides the config)")]
        sites: Vec<Site>,

        #[arg(long, help = "Save the overridden search profile")]
        save: bool,
    },

    /// Ingest postings from a JSON file (scraping service format)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, default_value = "Import", help = "Source tag stored with the postings")]
        source: String,
    },

    /// List stored jobs
    List {
        #[command(flatten)]
        filters: FilterArgs,

        #[arg(long = "details", help = "Show every field and a description preview")]
        details: bool,

        #[arg(long = "facets", help = "Show the companies, cities and sources available")]
        facets: bool,
    },

    /// Show one job
    Show {
        id: i64,

        #[arg(long = "address", help = "Look up the company address (OpenStreetMap)")]
        address: bool,
    },

    /// Change the application status of a job
    Status {
        id: i64,

        /// not-applied, applied, rejected or accepted
        status: String,
    },

    /// Open the job posting in the browser
    Open { id: i64 },

    /// Driving time from an address to the company of a job
    Route {
        id: i64,

        #[arg(long, value_name = "ADDRESS")]
        from: String,
    },

    /// Export jobs
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,

        #[command(flatten)]
        filters: FilterArgs,
    },
}
