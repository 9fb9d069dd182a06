//! Request bodies for the JSON API.
//!
//! Request values are assembled without credentials; the client attaches them
//! through [`Credentialed`] right before sending.

use serde::Serialize;

use crate::query::{FilterOrChain, FindQuery, Sort};
use crate::traits::Credentialed;
use crate::types::{DnsRecord, ProviderCredentials};

/// Credential fields shared by every request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseRequest {
    auth_token: String,
    #[serde(rename = "ownerAccountId", skip_serializing_if = "Option::is_none")]
    account_id: Option<String>,
}

macro_rules! impl_credentialed {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Credentialed for $ty {
                fn auth_token(&self) -> &str {
                    &self.base.auth_token
                }

                fn account_id(&self) -> Option<&str> {
                    self.base.account_id.as_deref()
                }

                fn with_credentials(mut self, credentials: &ProviderCredentials) -> Self {
                    self.base = BaseRequest {
                        auth_token: credentials.auth_token.clone(),
                        account_id: credentials.account_id.clone(),
                    };
                    self
                }
            }
        )+
    };
}

impl_credentialed!(RecordsUpdateRequest, FindRequest);

/// Batch mutation of one zone's records (`recordsUpdate`).
///
/// Built by value: every method consumes the request and returns a new one, so
/// two operations never share a half-built diff.
///
/// ```rust
/// use hostingde_provider::{DnsRecord, RecordsUpdateRequest};
///
/// let request = RecordsUpdateRequest::new("zc-1").add(DnsRecord {
///     name: Some("www.example.com".to_string()),
///     record_type: Some("A".to_string()),
///     content: Some("192.0.2.1".to_string()),
///     ..Default::default()
/// });
/// assert_eq!(request.records_to_add().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordsUpdateRequest {
    #[serde(flatten)]
    base: BaseRequest,
    zone_config_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    zone_name: Option<String>,
    records_to_add: Vec<DnsRecord>,
    records_to_modify: Vec<DnsRecord>,
    records_to_delete: Vec<DnsRecord>,
}

impl RecordsUpdateRequest {
    pub fn new(zone_config_id: impl Into<String>) -> Self {
        Self {
            base: BaseRequest::default(),
            zone_config_id: zone_config_id.into(),
            zone_name: None,
            records_to_add: Vec::new(),
            records_to_modify: Vec::new(),
            records_to_delete: Vec::new(),
        }
    }

    /// Address the zone by name in addition to its id.
    #[must_use]
    pub fn zone_name(mut self, zone_name: impl Into<String>) -> Self {
        self.zone_name = Some(zone_name.into());
        self
    }

    #[must_use]
    pub fn add(mut self, record: DnsRecord) -> Self {
        self.records_to_add.push(record);
        self
    }

    #[must_use]
    pub fn modify(mut self, record: DnsRecord) -> Self {
        self.records_to_modify.push(record);
        self
    }

    #[must_use]
    pub fn delete(mut self, record: DnsRecord) -> Self {
        self.records_to_delete.push(record);
        self
    }

    pub fn zone_config_id(&self) -> &str {
        &self.zone_config_id
    }

    pub fn records_to_add(&self) -> &[DnsRecord] {
        &self.records_to_add
    }

    pub fn records_to_modify(&self) -> &[DnsRecord] {
        &self.records_to_modify
    }

    pub fn records_to_delete(&self) -> &[DnsRecord] {
        &self.records_to_delete
    }

    /// True when the request would change nothing.
    pub fn is_empty(&self) -> bool {
        self.records_to_add.is_empty()
            && self.records_to_modify.is_empty()
            && self.records_to_delete.is_empty()
    }
}

/// Body shared by `recordsFind`, `zonesFind` and `zoneConfigsFind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindRequest {
    #[serde(flatten)]
    base: BaseRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<FilterOrChain>,
    limit: u32,
    page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<Sort>,
}

impl From<&FindQuery> for FindRequest {
    fn from(query: &FindQuery) -> Self {
        Self {
            base: BaseRequest::default(),
            filter: query.filter.clone(),
            limit: query.limit,
            page: query.page,
            sort: query.sort.clone(),
        }
    }
}
