//! hosting.de DNS API client

mod error;
mod http;
mod provider;
/// Response envelopes of the JSON API.
pub(crate) mod types;

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::types::ProviderCredentials;

/// Production endpoint of the DNS API.
pub const DEFAULT_BASE_URL: &str = "https://secure.hosting.de/api/dns/v1/json";

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Default number of automatic retries for lookups.
const DEFAULT_MAX_RETRIES: u32 = 2;

/// hosting.de DNS API client.
///
/// Authenticates by embedding the auth token in every request body.
///
/// # Construction
///
/// ```rust,no_run
/// use hostingde_provider::{HostingdeProvider, ProviderCredentials};
///
/// let provider = HostingdeProvider::builder(ProviderCredentials::new("your-auth-token"))
///     .max_retries(3)
///     .build()?;
/// # Ok::<(), hostingde_provider::ProviderError>(())
/// ```
#[derive(Debug)]
pub struct HostingdeProvider {
    pub(crate) client: Client,
    pub(crate) credentials: ProviderCredentials,
    pub(crate) base_url: String,
    pub(crate) max_retries: u32,
}

/// Builder for [`HostingdeProvider`].
pub struct HostingdeProviderBuilder {
    credentials: ProviderCredentials,
    base_url: String,
    max_retries: u32,
    request_timeout: Duration,
}

impl HostingdeProviderBuilder {
    fn new(credentials: ProviderCredentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Override the API endpoint (e.g. a reseller or sandbox URL).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the maximum number of automatic retries for transient lookup errors (default: 2).
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the per-request timeout (default: 30s).
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build the [`HostingdeProvider`] instance.
    pub fn build(self) -> Result<HostingdeProvider> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(self.request_timeout)
            .build()
            .map_err(|e| ProviderError::NetworkError {
                provider: crate::PROVIDER_NAME.to_string(),
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(HostingdeProvider {
            client,
            credentials: self.credentials,
            base_url: self.base_url,
            max_retries: self.max_retries,
        })
    }
}

impl HostingdeProvider {
    /// Creates a client with default settings.
    pub fn new(credentials: ProviderCredentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    /// Returns a builder for customizing the client configuration.
    pub fn builder(credentials: ProviderCredentials) -> HostingdeProviderBuilder {
        HostingdeProviderBuilder::new(credentials)
    }

    /// Endpoint base URL in use.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
