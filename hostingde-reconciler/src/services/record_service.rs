//! DNS record reconciliation service
//!
//! Drives the record lifecycle (`Absent -> Present -> ... -> Absent`) against
//! [`RecordsApi`]. Each operation is one remote call followed by local
//! resolution; nothing is cached between operations.

use std::slice;
use std::sync::Arc;

use hostingde_provider::RecordsApi;

use crate::error::{CoreError, CoreResult};
use crate::record::{
    build_diff, build_lookup_filter, match_record, normalize_content, validate_record, MatchKind,
};
use crate::types::{DesiredRecord, ObservedRecord, RecordRef, RecordState, RefreshOutcome, Zone};

/// Reconciler behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcilerOptions {
    /// Fail a create or update whose written record cannot be identified in
    /// the response (`true`, default), or return zero-valued state with only
    /// the zone id set (`false`).
    pub strict_matching: bool,
}

impl Default for ReconcilerOptions {
    fn default() -> Self {
        Self {
            strict_matching: true,
        }
    }
}

/// DNS record reconciliation service
pub struct RecordService {
    api: Arc<dyn RecordsApi>,
    options: ReconcilerOptions,
}

impl RecordService {
    /// Create a service with default options
    #[must_use]
    pub fn new(api: Arc<dyn RecordsApi>) -> Self {
        Self::with_options(api, ReconcilerOptions::default())
    }

    #[must_use]
    pub fn with_options(api: Arc<dyn RecordsApi>, options: ReconcilerOptions) -> Self {
        Self { api, options }
    }

    pub fn options(&self) -> ReconcilerOptions {
        self.options
    }

    /// Local checks only; no remote call.
    pub fn validate(&self, desired: &DesiredRecord) -> CoreResult<()> {
        validate_record(desired)
    }

    /// Create `desired` and return the state of the record the API created.
    pub async fn create(&self, desired: &DesiredRecord) -> CoreResult<RecordState> {
        validate_record(desired)?;
        let request = build_diff(&desired.zone_id, slice::from_ref(desired), &[], &[])?;

        log::debug!(
            "Creating {} {} in zone {}",
            desired.record_type,
            desired.name,
            desired.zone_id
        );
        let zone = self
            .api
            .batch_update_records(&request)
            .await
            .map_err(CoreError::remote("create", desired.name.as_str()))
            .inspect_err(log_failure)?;

        self.resolve_written(desired, zone)
    }

    /// Current state of record `record_id`, or `None` when it no longer exists.
    pub async fn read(&self, record_id: &str) -> CoreResult<Option<RecordState>> {
        if record_id.is_empty() {
            return Err(CoreError::validation("id", "must not be empty"));
        }

        let query = build_lookup_filter(record_id);
        // A missing id comes back as an empty page; any error is surfaced
        let page = self
            .api
            .find_records(&query)
            .await
            .map_err(CoreError::remote("read", record_id))
            .inspect_err(log_failure)?;

        let mut items = page.items;
        if items.len() > 1 {
            return Err(CoreError::AmbiguousLookup {
                record_id: record_id.to_string(),
                count: items.len(),
            });
        }
        let Some(record) = items.pop() else {
            log::debug!("Record {record_id} no longer exists");
            return Ok(None);
        };

        let mut observed = ObservedRecord::from(record);
        observed.content = normalize_content(&observed.content);
        Ok(Some(RecordState::from_observed(observed, "")))
    }

    /// Modify the record `desired.id` and return its new state.
    pub async fn update(&self, desired: &DesiredRecord) -> CoreResult<RecordState> {
        validate_record(desired)?;
        let request = build_diff(&desired.zone_id, &[], slice::from_ref(desired), &[])?;
        let record_id = desired.id.as_deref().unwrap_or_default();

        log::debug!("Updating record {record_id} in zone {}", desired.zone_id);
        let zone = self
            .api
            .batch_update_records(&request)
            .await
            .map_err(CoreError::remote("update", record_id))
            .inspect_err(log_failure)?;

        self.resolve_written(desired, zone)
    }

    /// Delete `record`. Success is the remote call succeeding; the response is
    /// not inspected.
    pub async fn delete(&self, record: &RecordRef) -> CoreResult<()> {
        let request = build_diff(&record.zone_id, &[], &[], slice::from_ref(record))?;

        log::debug!("Deleting record {} in zone {}", record.id, record.zone_id);
        self.api
            .batch_update_records(&request)
            .await
            .map_err(CoreError::remote("delete", record.id.as_str()))
            .inspect_err(log_failure)?;
        Ok(())
    }

    /// Adopt an existing record by id.
    pub async fn import(&self, record_id: &str) -> CoreResult<RecordState> {
        self.read(record_id)
            .await?
            .ok_or_else(|| CoreError::RecordNotFound(record_id.to_string()))
    }

    /// Read every id concurrently. Outcomes are returned in input order.
    pub async fn refresh_all(&self, record_ids: &[String]) -> Vec<(String, RefreshOutcome)> {
        let reads = record_ids.iter().map(|id| async move {
            let outcome = match self.read(id).await {
                Ok(Some(state)) => RefreshOutcome::Present(state),
                Ok(None) => RefreshOutcome::Gone,
                Err(e) => RefreshOutcome::Failed(e),
            };
            (id.clone(), outcome)
        });

        futures::future::join_all(reads).await
    }

    /// Find the record just written among the zone's returned records.
    fn resolve_written(&self, desired: &DesiredRecord, zone: Zone) -> CoreResult<RecordState> {
        let zone_id = if zone.zone_config.id.is_empty() {
            desired.zone_id.clone()
        } else {
            zone.zone_config.id
        };
        let candidates: Vec<ObservedRecord> =
            zone.records.into_iter().map(ObservedRecord::from).collect();

        match match_record(desired, &candidates) {
            Some(found) => {
                if found.kind == MatchKind::Normalized {
                    log::debug!(
                        "Record {} matched after normalizing its content",
                        found.record.id
                    );
                }
                Ok(RecordState::from_observed(found.record, &zone_id))
            }
            None if self.options.strict_matching => {
                let err = CoreError::RecordNotMatched {
                    zone_id,
                    name: desired.name.clone(),
                    record_type: desired.record_type.to_string(),
                };
                log_failure(&err);
                Err(err)
            }
            None => {
                log::warn!(
                    "Written record {} {} not found among {} returned records of zone {zone_id}",
                    desired.record_type,
                    desired.name,
                    candidates.len()
                );
                Ok(RecordState::unmatched(zone_id))
            }
        }
    }
}

fn log_failure(err: &CoreError) {
    if err.is_expected() {
        log::warn!("{err}");
    } else {
        log::error!("{err}");
    }
}
