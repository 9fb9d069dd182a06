//! `RecordsApi` and `ZonesApi` over the hosting.de JSON endpoints

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::query::FindQuery;
use crate::requests::{FindRequest, RecordsUpdateRequest};
use crate::traits::{ErrorContext, RecordsApi, ZonesApi};
use crate::types::{DnsRecord, PaginatedResponse, Zone, ZoneConfig};

use super::HostingdeProvider;
use super::types::FindResponse;

const RECORDS_UPDATE: &str = "recordsUpdate";
const RECORDS_FIND: &str = "recordsFind";
const ZONES_FIND: &str = "zonesFind";
const ZONE_CONFIGS_FIND: &str = "zoneConfigsFind";

/// Error context for a batch update: the zone plus the first record touched.
fn update_context(request: &RecordsUpdateRequest) -> ErrorContext {
    let first = request
        .records_to_modify()
        .iter()
        .chain(request.records_to_delete())
        .chain(request.records_to_add())
        .next();
    ErrorContext {
        record_name: first.and_then(|r| r.name.clone()),
        record_id: first.and_then(|r| r.id.clone()),
        zone_id: Some(request.zone_config_id().to_string()),
    }
}

/// Error context for a find: the record id when the query filters on one.
fn find_context(query: &FindQuery) -> ErrorContext {
    let record_id = query
        .filter
        .as_ref()
        .filter(|f| f.filter.field.as_deref() == Some("RecordId"))
        .and_then(|f| f.filter.value.clone());
    ErrorContext {
        record_id,
        ..Default::default()
    }
}

#[async_trait]
impl RecordsApi for HostingdeProvider {
    async fn batch_update_records(&self, request: &RecordsUpdateRequest) -> Result<Zone> {
        log::debug!(
            "[{}] {RECORDS_UPDATE} zone={} add={} modify={} delete={}",
            crate::PROVIDER_NAME,
            request.zone_config_id(),
            request.records_to_add().len(),
            request.records_to_modify().len(),
            request.records_to_delete().len()
        );

        // Not idempotent: a retried add may create a duplicate record
        self.call(RECORDS_UPDATE, request.clone(), update_context(request), 0)
            .await
    }

    async fn find_records(&self, query: &FindQuery) -> Result<PaginatedResponse<DnsRecord>> {
        let response: FindResponse<DnsRecord> = self
            .call(
                RECORDS_FIND,
                FindRequest::from(query),
                find_context(query),
                self.max_retries,
            )
            .await?;
        Ok(response.into_paginated())
    }
}

#[async_trait]
impl ZonesApi for HostingdeProvider {
    async fn find_zone_configs(
        &self,
        query: &FindQuery,
    ) -> Result<PaginatedResponse<ZoneConfig>> {
        let response: FindResponse<ZoneConfig> = self
            .call(
                ZONE_CONFIGS_FIND,
                FindRequest::from(query),
                ErrorContext::default(),
                self.max_retries,
            )
            .await?;
        Ok(response.into_paginated())
    }

    async fn find_zones(&self, query: &FindQuery) -> Result<PaginatedResponse<Zone>> {
        let response: FindResponse<Zone> = self
            .call(
                ZONES_FIND,
                FindRequest::from(query),
                ErrorContext::default(),
                self.max_retries,
            )
            .await?;
        Ok(response.into_paginated())
    }
}

impl HostingdeProvider {
    /// Check that the configured token is accepted.
    ///
    /// Returns `Ok(false)` when the API rejects the token; other failures are
    /// propagated.
    pub async fn validate_credentials(&self) -> Result<bool> {
        match self.find_zone_configs(&FindQuery::new().limit(1)).await {
            Ok(_) => Ok(true),
            Err(ProviderError::InvalidCredentials { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
