//! Geolocation API client implementation.

use ipatlas_core::{AtlasError, GeoIpResponse, GeoResult, Result};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The geolocation API base URL.
///
/// The free tier of ip-api.com is HTTP only; HTTPS requires a paid key.
const DEFAULT_BASE_URL: &str = "http://ip-api.com";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the ip-api.com geolocation service
#[derive(Clone)]
pub struct GeoClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
}

impl GeoClient {
    /// Create a client with default settings
    pub fn new() -> Result<Self> {
        GeoClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> GeoClientBuilder {
        GeoClientBuilder::new()
    }

    /// Look up geolocation details for an IP address.
    ///
    /// Any transport failure, non-2xx status, or unparseable body maps
    /// to [`AtlasError::GeoLookupFailed`] carrying the underlying error
    /// text. An upstream `"fail"` status maps to the same error kind
    /// with the fixed "could not fetch details" message. One request,
    /// no retry, no caching.
    pub async fn lookup(&self, ip: &str) -> Result<GeoResult> {
        let url = format!("{}/json/{}", self.inner.base_url, ip);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AtlasError::GeoLookupFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "geolocation API returned an error status");
            return Err(AtlasError::GeoLookupFailed(format!(
                "geolocation API returned HTTP {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AtlasError::GeoLookupFailed(e.to_string()))?;

        let parsed: GeoIpResponse = serde_json::from_str(&body)
            .map_err(|e| AtlasError::GeoLookupFailed(format!("malformed response: {e}")))?;

        if parsed.status != "success" {
            warn!(
                ip = %ip,
                message = parsed.message.as_deref().unwrap_or("none"),
                "geolocation API rejected the query"
            );
        }

        parsed.into_result()
    }
}

/// Builder for configuring a [`GeoClient`]
pub struct GeoClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for GeoClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoClientBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("ipatlas/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing and self-hosted mirrors)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client, validating the configured endpoint
    pub fn build(self) -> Result<GeoClient> {
        let base = url::Url::parse(&self.base_url)
            .map_err(|e| AtlasError::Config(format!("invalid geolocation endpoint: {e}")))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| AtlasError::Config(format!("could not build HTTP client: {e}")))?;

        Ok(GeoClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: base.as_str().trim_end_matches('/').to_string(),
            }),
        })
    }
}
