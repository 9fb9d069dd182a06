//! # hostingde-provider
//!
//! Typed client for the [hosting.de](https://www.hosting.de/) DNS JSON API.
//!
//! The API is a set of `POST` endpoints under
//! `https://secure.hosting.de/api/dns/v1/json/`. Every request body carries the
//! auth token, and every response is wrapped in an envelope holding a status,
//! errors, warnings and the payload. This crate hides both behind two traits:
//!
//! - [`RecordsApi`]: `recordsUpdate` (batch add/modify/delete) and `recordsFind`
//! - [`ZonesApi`]: `zoneConfigsFind` and `zonesFind`
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hostingde_provider::{
//!     DnsRecord, Filter, FindQuery, HostingdeProvider, ProviderCredentials, RecordsApi,
//!     RecordsUpdateRequest,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = HostingdeProvider::new(ProviderCredentials::new("your-auth-token"))?;
//!
//!     // Add a record; the response carries the whole zone
//!     let request = RecordsUpdateRequest::new("zone-config-id").add(DnsRecord {
//!         name: Some("www.example.com".to_string()),
//!         record_type: Some("A".to_string()),
//!         content: Some("192.0.2.1".to_string()),
//!         ttl: Some(3600),
//!         ..Default::default()
//!     });
//!     let zone = provider.batch_update_records(&request).await?;
//!     println!("zone now holds {} records", zone.records.len());
//!
//!     // Look a record up by id
//!     let query = FindQuery::new().filter(Filter::new("RecordId", "record-id")).limit(1);
//!     let found = provider.find_records(&query).await?;
//!     println!("{} match(es)", found.items.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::InvalidCredentials`]: the token was rejected
//! - [`ProviderError::InvalidParameter`]: the API rejected a request field
//! - [`ProviderError::RateLimited`] and [`ProviderError::NetworkError`]: transient
//!
//! Transient errors on lookups are retried with exponential backoff.
//! `recordsUpdate` is never retried.

mod error;
mod hostingde;
mod http_client;
mod query;
mod requests;
mod traits;
mod types;
mod utils;

/// Provider identifier used in errors and log prefixes.
pub const PROVIDER_NAME: &str = "hostingde";

pub use error::{ProviderError, Result};

pub use hostingde::{DEFAULT_BASE_URL, HostingdeProvider, HostingdeProviderBuilder};

pub use query::{
    Connective, DEFAULT_LIMIT, Filter, FilterOrChain, FindQuery, Relation, Sort, SortOrder,
};

pub use requests::{BaseRequest, FindRequest, RecordsUpdateRequest};

// Internal traits (error mapping) stay private
pub use traits::{Credentialed, RecordsApi, ZonesApi};

pub use types::{
    ApiErrorDetail, CredentialValidationError, DnsRecord, PaginatedResponse, ProviderCredentials,
    RecordType, SoaValues, Zone, ZoneConfig,
};

pub use utils::datetime;
