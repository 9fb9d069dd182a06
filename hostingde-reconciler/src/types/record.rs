//! Desired, observed and persisted record shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hostingde_provider::{DnsRecord, RecordType};

/// TTL applied when a declaration leaves it out (seconds).
pub const DEFAULT_TTL: u32 = 3600;

const fn default_ttl() -> u32 {
    DEFAULT_TTL
}

/// A record as the caller wants it to exist.
///
/// `id` is empty before creation and carries the provider-assigned id for
/// updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesiredRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Zone config id the record lives in.
    pub zone_id: String,
    /// Fully qualified record name.
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Canonical, unquoted content.
    pub content: String,
    #[serde(default = "default_ttl")]
    pub ttl: u32,
    /// Required for MX and SRV, forbidden otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl DesiredRecord {
    pub fn new(
        zone_id: impl Into<String>,
        name: impl Into<String>,
        record_type: RecordType,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            zone_id: zone_id.into(),
            name: name.into(),
            record_type,
            content: content.into(),
            ttl: DEFAULT_TTL,
            priority: None,
            comments: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Wire object for `recordsToAdd` / `recordsToModify`.
    pub fn to_wire(&self) -> DnsRecord {
        DnsRecord {
            id: self.id.clone(),
            zone_config_id: Some(self.zone_id.clone()),
            name: Some(self.name.clone()),
            record_type: Some(self.record_type.as_str().to_string()),
            content: Some(self.content.clone()),
            ttl: Some(self.ttl),
            priority: self.priority,
            comments: self.comments.clone().filter(|c| !c.is_empty()),
            ..Default::default()
        }
    }

    /// Minimal reference to this record, if it has an id.
    pub fn to_ref(&self) -> Option<RecordRef> {
        self.id.as_ref().map(|id| RecordRef {
            id: id.clone(),
            zone_id: self.zone_id.clone(),
            name: self.name.clone(),
            record_type: self.record_type,
        })
    }
}

/// A record as reported by the API after a write or read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservedRecord {
    pub id: String,
    pub zone_id: String,
    pub name: String,
    /// Type as echoed by the API; may be outside [`RecordType`].
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    pub priority: Option<u32>,
    pub comments: Option<String>,
    pub last_change_date: Option<DateTime<Utc>>,
}

impl From<DnsRecord> for ObservedRecord {
    fn from(record: DnsRecord) -> Self {
        Self {
            id: record.id.unwrap_or_default(),
            zone_id: record.zone_config_id.unwrap_or_default(),
            name: record.name.unwrap_or_default(),
            record_type: record.record_type.unwrap_or_default(),
            content: record.content.unwrap_or_default(),
            ttl: record.ttl.unwrap_or_default(),
            priority: record.priority,
            comments: record.comments.filter(|c| !c.is_empty()),
            last_change_date: record.last_change_date,
        }
    }
}

/// What the reconciler hands back to the caller to persist.
///
/// An empty `id` marks a write whose result could not be identified (only
/// produced with non-strict matching).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordState {
    pub id: String,
    pub zone_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(
        default,
        with = "hostingde_provider::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_change_date: Option<DateTime<Utc>>,
}

impl RecordState {
    /// Fold an observed record into persisted state.
    ///
    /// The API reports `priority: 0` on every record; it is only kept for types
    /// that carry one. A record without a zone id inherits `zone_id`.
    pub fn from_observed(record: ObservedRecord, zone_id: &str) -> Self {
        let keeps_priority = record
            .record_type
            .parse::<RecordType>()
            .ok()
            .is_none_or(RecordType::requires_priority);

        Self {
            zone_id: if record.zone_id.is_empty() {
                zone_id.to_string()
            } else {
                record.zone_id
            },
            id: record.id,
            name: record.name,
            record_type: record.record_type,
            content: record.content,
            ttl: record.ttl,
            priority: record.priority.filter(|_| keeps_priority),
            comments: record.comments,
            last_change_date: record.last_change_date,
        }
    }

    /// Zero-valued state for a write whose result was not identified.
    pub fn unmatched(zone_id: impl Into<String>) -> Self {
        Self {
            zone_id: zone_id.into(),
            ..Default::default()
        }
    }

    /// Whether this state refers to an identified remote record.
    pub fn is_matched(&self) -> bool {
        !self.id.is_empty()
    }

    /// Reference for a later delete.
    pub fn to_ref(&self) -> Option<RecordRef> {
        let record_type = self.record_type.parse().ok()?;
        self.is_matched().then(|| RecordRef {
            id: self.id.clone(),
            zone_id: self.zone_id.clone(),
            name: self.name.clone(),
            record_type,
        })
    }
}

/// The minimum needed to delete a record: no content, TTL or priority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRef {
    pub id: String,
    pub zone_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
}

impl RecordRef {
    /// Wire object for `recordsToDelete`.
    pub fn to_wire(&self) -> DnsRecord {
        DnsRecord {
            id: Some(self.id.clone()),
            name: Some(self.name.clone()),
            record_type: Some(self.record_type.as_str().to_string()),
            ..Default::default()
        }
    }
}

/// Result of refreshing one record id.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// The record exists; its current state.
    Present(RecordState),
    /// The record no longer exists and should be dropped.
    Gone,
    /// The lookup itself failed.
    Failed(crate::error::CoreError),
}

impl RefreshOutcome {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}
