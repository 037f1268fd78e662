//! Region hosts and user-listing URLs.

/// API host for the primary (US) data center.
pub const PRIMARY_HOST: &str = "api.percipio.com";

/// API host for the EU data center.
pub const EU_HOST: &str = "dew1-api.percipio.com";

/// Deployment region; selects which API host serves the requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    Primary,
    Eu,
}

impl Region {
    /// Map the `--eu` flag to a region.
    #[must_use]
    pub fn from_eu_flag(eu: bool) -> Self {
        if eu { Self::Eu } else { Self::Primary }
    }

    #[must_use]
    pub fn host(self) -> &'static str {
        match self {
            Self::Primary => PRIMARY_HOST,
            Self::Eu => EU_HOST,
        }
    }
}

/// The user-listing endpoint for one organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
    org_id: String,
}

impl Endpoint {
    /// HTTPS endpoint on the region's host.
    #[must_use]
    pub fn for_region(region: Region, org_id: &str) -> Self {
        Self::with_base(format!("https://{}", region.host()), org_id)
    }

    /// Endpoint rooted at an arbitrary base URL (scheme and authority, no path).
    #[must_use]
    pub fn with_base(base_url: impl Into<String>, org_id: &str) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            org_id: org_id.to_owned(),
        }
    }

    /// Host (authority) part of the base URL.
    #[must_use]
    pub fn host(&self) -> &str {
        self.base_url
            .split_once("://")
            .map_or(self.base_url.as_str(), |(_, authority)| authority)
    }

    /// Full URL of the page starting at `offset`.
    #[must_use]
    pub fn page_url(&self, offset: usize) -> String {
        format!(
            "{}/user-management/v1/organizations/{}/users?offset={offset}",
            self.base_url, self.org_id
        )
    }
}
