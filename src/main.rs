#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! user-uuids — export an organization's user roster, with UUIDs, to CSV.

mod api;
mod cli;
mod commands;
mod config;
mod errors;
mod export;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx};
use config::Config;

fn main() {
    let config = Config::from(Cli::parse());

    let ctx = OutputCtx::new(config.json, config.debug);
    ctx.banner();
    cli::logging::init(config.debug);

    match commands::run(&config, &ctx) {
        Ok(summary) => ctx.write_summary(&summary),
        Err(err) => {
            ctx.write_error(&err);
            std::process::exit(err.exit_code());
        }
    }
}
