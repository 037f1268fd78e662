/// Top-level error for one run, and its exit-code mapping.
use thiserror::Error;

use crate::api::FetchError;
use crate::export::ExportError;

/// Any fatal failure after the command line has been parsed.
#[derive(Debug, Error)]
pub enum AppError {
    /// Retrieving a page failed; no output was written.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The roster was fetched but the CSV could not be written.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Exit code mapping for `AppError` variants.
///
/// Usage errors never get here: clap exits with 2 on its own.
impl AppError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Fetch(_) => 1,
            Self::Export(_) => 3,
        }
    }

    /// Machine-readable error code (`snake_case`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fetch(err) => err.code(),
            Self::Export(_) => "output_io",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_fetch_exit_code() {
        let err = AppError::from(FetchError::Status {
            status: 500,
            url: "https://api.percipio.com/x".to_owned(),
        });
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.code(), "http_status");
        assert_eq!(err.to_string(), "Received HTTP 500 from https://api.percipio.com/x");
    }

    #[test]
    fn test_export_exit_code() {
        let err = AppError::from(ExportError::Io {
            path: PathBuf::from("out.csv"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.code(), "output_io");
    }
}
