use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::query::FindQuery;
use crate::requests::RecordsUpdateRequest;
use crate::types::{
    ApiErrorDetail, DnsRecord, PaginatedResponse, ProviderCredentials, Zone, ZoneConfig,
};

/// Error object as returned by the API (internal use).
#[derive(Debug, Clone, Default)]
pub(crate) struct RawApiError {
    /// Numeric error code.
    pub code: Option<i64>,
    /// Human-readable error text.
    pub message: String,
    /// Object type the error refers to.
    pub context_object: Option<String>,
    /// Field path the error refers to.
    pub context_path: Option<String>,
    /// Offending value, if the API echoes it.
    pub value: Option<String>,
    pub details: Vec<ApiErrorDetail>,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }
}

/// Identifiers of the request being mapped, so the unified error can name them.
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Record name (for parameter errors on a record).
    pub record_name: Option<String>,
    /// Record id (for `RecordNotFound`).
    pub record_id: Option<String>,
    /// Zone config id (for `DomainNotFound`).
    pub zone_id: Option<String>,
}

/// Maps raw API errors to [`ProviderError`] (internal use).
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier.
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error to the unified error type.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: parse error.
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: structured API error (fallback).
    fn api_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::ApiError {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            context_object: raw.context_object,
            context_path: raw.context_path,
            raw_message: raw.message,
            details: raw.details,
        }
    }
}

/// A request value that carries the API credentials in its body.
///
/// Every hosting.de request embeds `authToken` (and optionally `ownerAccountId`).
/// The client attaches them right before dispatch through this trait, so request
/// values are built without credentials and no credential state is global.
pub trait Credentialed {
    /// Auth token currently attached (empty when none).
    fn auth_token(&self) -> &str;

    /// Account the request acts on behalf of.
    fn account_id(&self) -> Option<&str>;

    /// Return the request with `credentials` attached.
    #[must_use]
    fn with_credentials(self, credentials: &ProviderCredentials) -> Self
    where
        Self: Sized;
}

/// Record-level transport consumed by the reconciler.
///
/// [`HostingdeProvider`](crate::HostingdeProvider) implements it over HTTP; tests
/// substitute an in-memory fake.
#[async_trait]
pub trait RecordsApi: Send + Sync {
    /// Apply a batch of additions, modifications and deletions to one zone.
    ///
    /// Returns the zone with its complete post-write record set.
    async fn batch_update_records(&self, request: &RecordsUpdateRequest) -> Result<Zone>;

    /// Find records matching `query`.
    async fn find_records(&self, query: &FindQuery) -> Result<PaginatedResponse<DnsRecord>>;
}

/// Zone-level listings. Zone creation and deletion are not exposed.
#[async_trait]
pub trait ZonesApi: Send + Sync {
    /// Find zone configurations matching `query`.
    async fn find_zone_configs(&self, query: &FindQuery)
    -> Result<PaginatedResponse<ZoneConfig>>;

    /// Find zones (config plus records) matching `query`.
    async fn find_zones(&self, query: &FindQuery) -> Result<PaginatedResponse<Zone>>;
}
