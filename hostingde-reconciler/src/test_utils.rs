//! Test helper module
//!
//! An in-memory stand-in for the hosting.de records endpoints.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use hostingde_provider::{ProviderError, RecordsApi, Result};
use tokio::sync::RwLock;

use crate::record::RECORD_ID_FIELD;
use crate::types::{
    DnsRecord, FindQuery, PaginatedResponse, RecordsUpdateRequest, Zone, ZoneConfig,
};

/// TXT wire record in zone `z1`.
pub fn txt_record(id: &str, name: &str, content: &str) -> DnsRecord {
    DnsRecord {
        id: Some(id.to_string()),
        zone_config_id: Some("z1".to_string()),
        name: Some(name.to_string()),
        record_type: Some("TXT".to_string()),
        content: Some(content.to_string()),
        ttl: Some(3600),
        ..Default::default()
    }
}

// ===== MockRecordsApi =====

/// One zone's records, mutated by `recordsUpdate` the way the API does.
///
/// Added records get ids `rec-1`, `rec-2`, ... and `priority: 0` when none
/// was sent. With [`quoting_txt`](Self::quoting_txt) TXT content comes back
/// wrapped in quotes.
pub struct MockRecordsApi {
    zone_id: String,
    quote_txt: bool,
    honour_limit: bool,
    next_id: AtomicU64,
    records: RwLock<Vec<DnsRecord>>,
    update_requests: RwLock<Vec<RecordsUpdateRequest>>,
    find_queries: RwLock<Vec<FindQuery>>,
    /// If Some, returned instead of the zone after a batch update
    update_response: RwLock<Option<Zone>>,
    update_error: RwLock<Option<ProviderError>>,
    find_error: RwLock<Option<ProviderError>>,
}

impl MockRecordsApi {
    pub fn new(zone_id: &str) -> Self {
        Self {
            zone_id: zone_id.to_string(),
            quote_txt: false,
            honour_limit: true,
            next_id: AtomicU64::new(1),
            records: RwLock::new(Vec::new()),
            update_requests: RwLock::new(Vec::new()),
            find_queries: RwLock::new(Vec::new()),
            update_response: RwLock::new(None),
            update_error: RwLock::new(None),
            find_error: RwLock::new(None),
        }
    }

    #[must_use]
    pub fn quoting_txt(mut self) -> Self {
        self.quote_txt = true;
        self
    }

    /// Return every match of a find, regardless of its limit.
    #[must_use]
    pub fn ignoring_limit(mut self) -> Self {
        self.honour_limit = false;
        self
    }

    /// Insert an existing record (zone id filled in when missing).
    pub async fn seed(&self, mut record: DnsRecord) {
        record.zone_config_id.get_or_insert_with(|| self.zone_id.clone());
        self.records.write().await.push(record);
    }

    pub async fn respond_with(&self, zone: Zone) {
        *self.update_response.write().await = Some(zone);
    }

    pub async fn fail_updates_with(&self, err: ProviderError) {
        *self.update_error.write().await = Some(err);
    }

    pub async fn fail_finds_with(&self, err: ProviderError) {
        *self.find_error.write().await = Some(err);
    }

    pub async fn records(&self) -> Vec<DnsRecord> {
        self.records.read().await.clone()
    }

    pub async fn update_requests(&self) -> Vec<RecordsUpdateRequest> {
        self.update_requests.read().await.clone()
    }

    pub async fn find_queries(&self) -> Vec<FindQuery> {
        self.find_queries.read().await.clone()
    }

    fn stored_form(&self, mut record: DnsRecord) -> DnsRecord {
        record.zone_config_id = Some(self.zone_id.clone());
        record.priority = record.priority.or(Some(0));
        record.last_change_date = Some(Utc::now());
        if self.quote_txt && record.record_type.as_deref() == Some("TXT") {
            record.content = record.content.map(|c| format!("\"{c}\""));
        }
        record
    }

    fn not_found(id: Option<&str>) -> ProviderError {
        ProviderError::RecordNotFound {
            provider: "hostingde".to_string(),
            record_id: id.unwrap_or_default().to_string(),
            raw_message: Some("Record does not exist".to_string()),
        }
    }
}

#[async_trait]
impl RecordsApi for MockRecordsApi {
    async fn batch_update_records(&self, request: &RecordsUpdateRequest) -> Result<Zone> {
        self.update_requests.write().await.push(request.clone());
        if let Some(err) = self.update_error.read().await.clone() {
            return Err(err);
        }

        let mut records = self.records.write().await;

        for deleted in request.records_to_delete() {
            let before = records.len();
            records.retain(|r| r.id != deleted.id);
            if records.len() == before {
                return Err(Self::not_found(deleted.id.as_deref()));
            }
        }

        for modified in request.records_to_modify() {
            let Some(slot) = records.iter_mut().find(|r| r.id == modified.id) else {
                return Err(Self::not_found(modified.id.as_deref()));
            };
            *slot = self.stored_form(modified.clone());
        }

        for added in request.records_to_add() {
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            let mut record = self.stored_form(added.clone());
            record.id = Some(format!("rec-{id}"));
            records.push(record);
        }

        if let Some(zone) = self.update_response.read().await.clone() {
            return Ok(zone);
        }

        Ok(Zone {
            records: records.clone(),
            zone_config: ZoneConfig {
                id: self.zone_id.clone(),
                ..Default::default()
            },
        })
    }

    async fn find_records(&self, query: &FindQuery) -> Result<PaginatedResponse<DnsRecord>> {
        self.find_queries.write().await.push(query.clone());
        if let Some(err) = self.find_error.read().await.clone() {
            return Err(err);
        }

        let wanted_id = query
            .filter
            .as_ref()
            .filter(|f| f.filter.field.as_deref() == Some(RECORD_ID_FIELD))
            .and_then(|f| f.filter.value.clone());

        let matching: Vec<DnsRecord> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| wanted_id.is_none() || r.id == wanted_id)
            .cloned()
            .collect();

        let total = u32::try_from(matching.len()).unwrap_or(u32::MAX);
        let items = if self.honour_limit {
            let skip = (query.page.saturating_sub(1) * query.limit) as usize;
            matching
                .into_iter()
                .skip(skip)
                .take(query.limit as usize)
                .collect()
        } else {
            matching
        };

        Ok(PaginatedResponse::new(items, query.page, query.limit, total))
    }
}
