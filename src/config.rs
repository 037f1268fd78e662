/// Resolved, immutable run configuration.
use std::path::PathBuf;
use std::time::Duration;

use chrono::{Local, NaiveDate};

use crate::api::Region;
use crate::cli::Cli;

/// Everything one run needs, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub org_id: String,
    pub bearer_token: String,
    pub region: Region,
    pub debug: bool,
    /// Explicit `-o` path; `None` means a date-stamped name in the working directory.
    pub output_path: Option<PathBuf>,
    pub page_size: usize,
    pub timeout: Duration,
    pub json: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            org_id: cli.org_id,
            bearer_token: cli.bearer,
            region: Region::from_eu_flag(cli.eu),
            debug: cli.debug,
            output_path: cli.output,
            page_size: cli.page_size,
            timeout: Duration::from_secs(cli.timeout),
            json: cli.json,
        }
    }
}

impl Config {
    /// Where the CSV goes: `-o` if given, otherwise `<today>.csv`.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(default_output_path)
    }
}

/// `<YYYY-MM-DD>.csv` for the current local date.
#[must_use]
pub fn default_output_path() -> PathBuf {
    dated_filename(Local::now().date_naive())
}

#[must_use]
pub fn dated_filename(date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("{}.csv", date.format("%Y-%m-%d")))
}
