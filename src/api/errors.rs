/// Errors from the user-management API layer.
use thiserror::Error;

/// Typed errors from fetching user pages. All of them abort the run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("Cannot build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a full response (connect, TLS, timeout, body read).
    #[error("Request to {url} failed: {source}")]
    Transport {
        /// URL of the failed request.
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with anything other than 200 OK.
    #[error("Received HTTP {status} from {url}")]
    Status {
        /// HTTP status code returned.
        status: u16,
        /// URL of the failed request.
        url: String,
    },

    /// The body was not a JSON array of user objects.
    #[error("Response from {url} is not a JSON array of user records: {source}")]
    Decode {
        /// URL of the failed request.
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Machine-readable error code (`snake_case`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Client(_) => "client_error",
            Self::Transport { .. } => "transport_error",
            Self::Status { .. } => "http_status",
            Self::Decode { .. } => "decode_error",
        }
    }
}
