/// Logging setup: `tracing` events to stderr, filtered by `--debug` and `RUST_LOG`.
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
pub fn init(debug: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(rust_log.as_deref(), debug);

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Filter from `RUST_LOG` (if valid) plus this crate's own level.
///
/// Without `RUST_LOG` only this crate's events pass: `debug` and up with
/// `--debug`, `warn` and up without. `--debug` always lifts this crate to
/// `debug`, whatever `RUST_LOG` says.
fn build_filter(rust_log: Option<&str>, debug: bool) -> EnvFilter {
    let level = if debug { "debug" } else { "warn" };
    let own = format!("{}={level}", env!("CARGO_CRATE_NAME"));

    let Some(filter) = rust_log.and_then(|spec| EnvFilter::try_new(spec).ok()) else {
        return EnvFilter::new(own);
    };
    if !debug {
        return filter;
    }
    match own.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn test_default_levels() {
        assert_eq!(build_filter(None, false).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(build_filter(None, true).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_debug_flag_survives_rust_log() {
        assert_eq!(
            build_filter(Some("warn"), true).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_rust_log_alone() {
        assert_eq!(
            build_filter(Some("error"), false).max_level_hint(),
            Some(LevelFilter::ERROR)
        );
    }
}
