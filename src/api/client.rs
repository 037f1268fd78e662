/// HTTP page source backed by a blocking reqwest client.
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::debug;

use super::endpoint::Endpoint;
use super::errors::FetchError;
use super::roster::UserRecord;

/// Something that can return one page of user records at a given offset.
pub trait PageSource {
    /// Fetch the page starting at `offset`. An empty page means no more data.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the page cannot be retrieved or decoded.
    fn fetch_page(&self, offset: usize) -> Result<Vec<UserRecord>, FetchError>;
}

/// Fetches pages from the user-management service over HTTPS.
pub struct HttpPageSource {
    client: Client,
    endpoint: Endpoint,
    bearer_token: String,
}

impl HttpPageSource {
    /// Build a source for `endpoint`, authenticating with `bearer_token`.
    ///
    /// Idle connections are never pooled, so every page opens a fresh connection.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the TLS backend cannot be initialised.
    pub fn new(
        endpoint: Endpoint,
        bearer_token: &str,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self::with_client(client, endpoint, bearer_token))
    }

    /// Build a source around an already configured client.
    #[must_use]
    pub fn with_client(client: Client, endpoint: Endpoint, bearer_token: &str) -> Self {
        Self {
            client,
            endpoint,
            bearer_token: bearer_token.to_owned(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

impl PageSource for HttpPageSource {
    fn fetch_page(&self, offset: usize) -> Result<Vec<UserRecord>, FetchError> {
        let url = self.endpoint.page_url(offset);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.bearer_token)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().map_err(|source| FetchError::Transport {
            url: url.clone(),
            source,
        })?;
        let page = decode_page(&body).map_err(|source| FetchError::Decode { url, source })?;
        debug!(offset, status = status.as_u16(), records = page.len(), "fetched page");
        Ok(page)
    }
}

/// Decode a response body into one page of records.
///
/// # Errors
///
/// Fails unless the body is a JSON array whose elements are all objects.
pub fn decode_page(body: &[u8]) -> Result<Vec<UserRecord>, serde_json::Error> {
    serde_json::from_slice(body)
}
