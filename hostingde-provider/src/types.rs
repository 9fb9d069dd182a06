use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

// ============ Credentials ============

/// Errors raised while building [`ProviderCredentials`] from loosely typed input.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    MissingField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Credentials attached to every hosting.de API request.
///
/// The auth token authenticates the caller. The optional account id makes the
/// request act on behalf of a sub-account (`ownerAccountId`).
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCredentials {
    /// API auth token.
    pub auth_token: String,
    /// Account the request acts on behalf of.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("auth_token", &"***")
            .field("account_id", &self.account_id)
            .finish()
    }
}

impl ProviderCredentials {
    /// Key of the auth token in credential maps.
    pub const AUTH_TOKEN_KEY: &'static str = "authToken";
    /// Key of the account id in credential maps.
    pub const ACCOUNT_ID_KEY: &'static str = "accountId";

    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            account_id: None,
        }
    }

    #[must_use]
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Build credentials from a string map (e.g. form input or a config file section).
    ///
    /// `authToken` is required; an empty `accountId` is treated as absent.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, CredentialValidationError> {
        let auth_token = Self::get_required_field(map, Self::AUTH_TOKEN_KEY, "Auth Token")?;
        let account_id = map
            .get(Self::ACCOUNT_ID_KEY)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        Ok(Self {
            auth_token,
            account_id,
        })
    }

    fn get_required_field(
        map: &HashMap<String, String>,
        key: &str,
        label: &str,
    ) -> Result<String, CredentialValidationError> {
        let value = map
            .get(key)
            .ok_or_else(|| CredentialValidationError::MissingField {
                field: key.to_string(),
                label: label.to_string(),
            })?;

        if value.trim().is_empty() {
            return Err(CredentialValidationError::EmptyField {
                field: key.to_string(),
                label: label.to_string(),
            });
        }

        Ok(value.clone())
    }

    /// Convert back to a string map, the inverse of [`from_map`](Self::from_map).
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert(Self::AUTH_TOKEN_KEY.to_string(), self.auth_token.clone());
        if let Some(account_id) = &self.account_id {
            map.insert(Self::ACCOUNT_ID_KEY.to_string(), account_id.clone());
        }
        map
    }
}

// ============ Pagination ============

/// A page of results from one of the `*Find` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// Current page number (1-indexed).
    pub page: u32,
    /// Page size used for this request.
    pub page_size: u32,
    /// Total number of items across all pages.
    pub total_count: u32,
    /// Whether there are more pages after this one.
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response, computing [`has_more`](Self::has_more).
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_count: u32) -> Self {
        let has_more = page.saturating_mul(page_size) < total_count;
        Self {
            items,
            page,
            page_size,
            total_count,
            has_more,
        }
    }
}

// ============ Record types ============

/// Record types accepted by the hosting.de DNS API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Alias,
    Caa,
    Cert,
    Cname,
    Dnskey,
    Ds,
    /// Mail exchange. Carries a priority.
    Mx,
    Ns,
    Nsec,
    Nsec3,
    Nsec3param,
    Nullmx,
    Openpgpkey,
    Ptr,
    Rrsig,
    /// Service locator. Carries a priority.
    Srv,
    Sshfp,
    Tlsa,
    Txt,
}

impl RecordType {
    pub const ALL: [Self; 21] = [
        Self::A,
        Self::Aaaa,
        Self::Alias,
        Self::Caa,
        Self::Cert,
        Self::Cname,
        Self::Dnskey,
        Self::Ds,
        Self::Mx,
        Self::Ns,
        Self::Nsec,
        Self::Nsec3,
        Self::Nsec3param,
        Self::Nullmx,
        Self::Openpgpkey,
        Self::Ptr,
        Self::Rrsig,
        Self::Srv,
        Self::Sshfp,
        Self::Tlsa,
        Self::Txt,
    ];

    /// Wire representation (`"MX"`, `"NSEC3PARAM"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Alias => "ALIAS",
            Self::Caa => "CAA",
            Self::Cert => "CERT",
            Self::Cname => "CNAME",
            Self::Dnskey => "DNSKEY",
            Self::Ds => "DS",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Nsec => "NSEC",
            Self::Nsec3 => "NSEC3",
            Self::Nsec3param => "NSEC3PARAM",
            Self::Nullmx => "NULLMX",
            Self::Openpgpkey => "OPENPGPKEY",
            Self::Ptr => "PTR",
            Self::Rrsig => "RRSIG",
            Self::Srv => "SRV",
            Self::Sshfp => "SSHFP",
            Self::Tlsa => "TLSA",
            Self::Txt => "TXT",
        }
    }

    /// MX and SRV records must carry a priority; every other type must not.
    pub fn requires_priority(self) -> bool {
        matches!(self, Self::Mx | Self::Srv)
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProviderError::InvalidParameter {
                provider: crate::PROVIDER_NAME.to_string(),
                param: "type".to_string(),
                detail: format!("unsupported record type: {s}"),
            })
    }
}

// ============ Wire objects ============

/// A record object as sent to and returned by the API.
///
/// Every field is optional: requests only carry the fields the operation needs
/// (a delete carries just `id`, `name` and `type`), and absent fields are omitted
/// from the serialized JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_config_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(
        default,
        with = "crate::utils::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_change_date: Option<DateTime<Utc>>,
}

/// SOA timer values of a zone, in seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoaValues {
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub ttl: u32,
    pub negative_ttl: u32,
}

/// Zone configuration object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoneConfig {
    pub id: String,
    pub account_id: String,
    pub status: String,
    pub name: String,
    pub name_unicode: String,
    pub master_ip: String,
    #[serde(rename = "type")]
    pub zone_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub zone_transfer_whitelist: Vec<String>,
    #[serde(with = "crate::utils::datetime", skip_serializing_if = "Option::is_none")]
    pub last_change_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_server_group_id: Option<String>,
    #[serde(rename = "dnsSecMode", skip_serializing_if = "Option::is_none")]
    pub dnssec_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soa_values: Option<SoaValues>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_values: Option<serde_json::Value>,
}

/// A zone: its configuration plus its full record set.
///
/// `recordsUpdate` answers with this object, so after a batch mutation the
/// caller sees every record of the zone, not only the ones it touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Zone {
    pub records: Vec<DnsRecord>,
    pub zone_config: ZoneConfig,
}

/// Key/value detail attached to an API error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub key: String,
    pub value: String,
}
