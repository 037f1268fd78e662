/// The export pipeline: fetch every page, then write the CSV.
use tracing::warn;

use crate::api::{Endpoint, HttpPageSource, PageSource, fetch_all};
use crate::cli::OutputCtx;
use crate::config::Config;
use crate::errors::AppError;
use crate::export::write_csv_file;
use crate::types::RunOutput;

/// The endpoint selected by the configured region and org.
#[must_use]
pub fn endpoint_for(config: &Config) -> Endpoint {
    Endpoint::for_region(config.region, &config.org_id)
}

/// Run the export against the live service.
///
/// # Errors
///
/// Returns `AppError::Fetch` on any failed page and `AppError::Export` if the
/// CSV cannot be written.
pub fn run(config: &Config, ctx: &OutputCtx) -> Result<RunOutput, AppError> {
    let source = HttpPageSource::new(endpoint_for(config), &config.bearer_token, config.timeout)?;
    let host = source.endpoint().host().to_owned();
    run_with(&source, &host, config, ctx)
}

/// Run the export against any page source.
///
/// Nothing is written unless every page was fetched.
///
/// # Errors
///
/// Same as [`run`].
pub fn run_with<S: PageSource + ?Sized>(
    source: &S,
    host: &str,
    config: &Config,
    ctx: &OutputCtx,
) -> Result<RunOutput, AppError> {
    ctx.status(format_args!("Okay, using {host}"));

    let t_fetch = ctx.timer("fetch_all");
    let roster = fetch_all(source, config.page_size)?;
    drop(t_fetch);

    ctx.status(format_args!("Found {} user records via the API", roster.len()));
    if roster.is_empty() {
        warn!(org_id = %config.org_id, "service returned no users; writing header only");
    }

    let path = config.output_path();
    ctx.status(format_args!("Passing file to {}", path.display()));

    let t_write = ctx.timer("write_csv");
    write_csv_file(&roster, &path)?;
    drop(t_write);

    Ok(RunOutput {
        ok: true,
        path: path.display().to_string(),
        records: roster.len(),
        host: host.to_owned(),
    })
}
