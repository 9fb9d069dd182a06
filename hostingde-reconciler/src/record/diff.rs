//! Lookup filters and batch diffs

use std::collections::HashSet;

use hostingde_provider::{Filter, FindQuery, RecordsUpdateRequest};

use crate::error::{CoreError, CoreResult};
use crate::types::{DesiredRecord, RecordRef};

/// Filter field holding the provider-assigned record id.
pub const RECORD_ID_FIELD: &str = "RecordId";

/// Point lookup of one record by id: implicit equality, limit 1, page 1.
pub fn build_lookup_filter(record_id: &str) -> FindQuery {
    FindQuery::new()
        .filter(Filter::new(RECORD_ID_FIELD, record_id))
        .limit(1)
        .page(1)
}

/// Package additions, modifications and deletions for one zone.
///
/// Every record must belong to `zone_id`. Additions must not carry an id,
/// modifications must, and no id may appear twice across the lists.
/// Deletions are sent as `{id, name, type}` only.
pub fn build_diff(
    zone_id: &str,
    add: &[DesiredRecord],
    modify: &[DesiredRecord],
    delete: &[RecordRef],
) -> CoreResult<RecordsUpdateRequest> {
    if zone_id.is_empty() {
        return Err(CoreError::InvalidDiff("zone id is empty".to_string()));
    }

    let foreign_zone = add
        .iter()
        .chain(modify)
        .map(|r| (&r.name, &r.zone_id))
        .chain(delete.iter().map(|r| (&r.name, &r.zone_id)))
        .find(|(_, z)| z.as_str() != zone_id);
    if let Some((name, other)) = foreign_zone {
        return Err(CoreError::InvalidDiff(format!(
            "{name} belongs to zone {other}, not {zone_id}"
        )));
    }

    if let Some(record) = add.iter().find(|r| r.id.is_some()) {
        return Err(CoreError::InvalidDiff(format!(
            "record to add {} already has an id",
            record.name
        )));
    }

    let mut seen = HashSet::new();
    let modify_ids = modify.iter().map(|r| match r.id.as_deref() {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(CoreError::InvalidDiff(format!(
            "record to modify {} has no id",
            r.name
        ))),
    });
    let delete_ids = delete.iter().map(|r| {
        if r.id.is_empty() {
            Err(CoreError::InvalidDiff(format!(
                "record to delete {} has no id",
                r.name
            )))
        } else {
            Ok(r.id.as_str())
        }
    });
    for id in modify_ids.chain(delete_ids) {
        let id = id?;
        if !seen.insert(id) {
            return Err(CoreError::InvalidDiff(format!(
                "record {id} appears more than once"
            )));
        }
    }

    let request = add
        .iter()
        .fold(RecordsUpdateRequest::new(zone_id), |req, r| req.add(r.to_wire()));
    let request = modify.iter().fold(request, |req, r| req.modify(r.to_wire()));
    Ok(delete.iter().fold(request, |req, r| req.delete(r.to_wire())))
}
