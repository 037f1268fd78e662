/// Serializable status envelopes written under `--json`.
///
/// Decoupled from the internal `Roster` / `AppError` types.
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Final status of a successful run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutput {
    /// Always `true`.
    pub ok: bool,
    /// Path of the CSV that was written.
    pub path: String,
    /// Number of user records written (excluding the header row).
    pub records: usize,
    /// API host that served the requests.
    pub host: String,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Process exit code that accompanies this error.
    pub exit_code: i32,
}

impl ErrorOutput {
    /// Construct from an `AppError`.
    #[must_use]
    pub fn from_app_error(err: &AppError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                exit_code: err.exit_code(),
            },
        }
    }
}
