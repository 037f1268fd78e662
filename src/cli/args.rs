/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::Parser;
use clap::builder::RangedU64ValueParser;

use crate::api::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// user-uuids — export an organization's user roster, with UUIDs, to CSV.
#[derive(Debug, Parser)]
#[command(
    name = "user-uuids",
    about = "Ingest the user-management service to get a CSV report of all user UUIDs",
    version
)]
pub struct Cli {
    /// The organization UUID for the client in question.
    #[arg(short = 'i', value_name = "ORG_ID")]
    pub org_id: String,

    /// A valid bearer token.
    #[arg(
        short = 'b',
        value_name = "TOKEN",
        env = "USER_MGMT_BEARER_TOKEN",
        hide_env_values = true
    )]
    pub bearer: String,

    /// Query the EU data center rather than the primary one.
    #[arg(long)]
    pub eu: bool,

    /// Log per-page progress to stderr.
    #[arg(long)]
    pub debug: bool,

    /// Filename for the output file. Defaults to today's date, e.g. 2024-05-01.csv.
    #[arg(short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Offset increment between pages. Must match the service's page size.
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_PAGE_SIZE as u64)
    )]
    pub page_size: usize,

    /// Per-request timeout in seconds.
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Write the final status as JSON (success to stdout, errors to stderr).
    #[arg(long)]
    pub json: bool,
}
