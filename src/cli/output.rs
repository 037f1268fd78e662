/// Output formatting: banner, status lines, final summary and errors.
use std::fmt::Display;
use std::io::Write;

use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::types::{ErrorOutput, RunOutput};

/// Output context passed to every stage that reports to the operator.
pub struct OutputCtx {
    /// When true, human status lines are suppressed and the final status is JSON.
    pub json: bool,
    /// When true, stage timings are logged.
    pub debug: bool,
}

impl OutputCtx {
    #[must_use]
    pub fn new(json: bool, debug: bool) -> Self {
        Self { json, debug }
    }

    /// Print the welcome banner.
    pub fn banner(&self) {
        self.status(format_args!(
            "Welcome to the UUID Retrieval Tool, Version {}",
            env!("CARGO_PKG_VERSION")
        ));
    }

    /// Print a human-readable progress line to stdout. Silent under `--json`.
    pub fn status(&self, line: impl Display) {
        if !self.json {
            println!("{line}");
        }
    }

    /// Start a named timer. Logs elapsed time on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Write the terminal success line: the output path, or a JSON envelope.
    pub fn write_summary(&self, summary: &RunOutput) {
        if self.json {
            print_json(summary);
        } else {
            println!("{}", summary.path);
        }
    }

    /// Write a structured error to stderr.
    pub fn write_error(&self, err: &AppError) {
        let stderr = std::io::stderr();
        let mut out = stderr.lock();
        if self.json {
            let s = serde_json::to_string_pretty(&ErrorOutput::from_app_error(err))
                .unwrap_or_default();
            let _ = writeln!(out, "{s}");
        } else {
            let _ = writeln!(out, "Error: {err}");
        }
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds when dropped.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            debug!(stage = self.label, "{ms:.2}ms");
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
