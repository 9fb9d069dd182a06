//! Local checks run before any remote call

use crate::error::{CoreError, CoreResult};
use crate::types::DesiredRecord;

/// Smallest TTL the API accepts (seconds).
pub const MIN_TTL: u32 = 60;
/// Largest TTL the API accepts (one year, in seconds).
pub const MAX_TTL: u32 = 31_556_926;

/// Check a desired record against the rules the API would otherwise reject it for.
///
/// - `zoneId` and `name` must be non-empty
/// - `ttl` must lie in [`MIN_TTL`]..=[`MAX_TTL`]
/// - MX and SRV records need a priority, other types must not set one
pub fn validate_record(record: &DesiredRecord) -> CoreResult<()> {
    if record.zone_id.trim().is_empty() {
        return Err(CoreError::validation("zoneId", "must not be empty"));
    }
    if record.name.trim().is_empty() {
        return Err(CoreError::validation("name", "must not be empty"));
    }

    if !(MIN_TTL..=MAX_TTL).contains(&record.ttl) {
        return Err(CoreError::validation(
            "ttl",
            format!("{} is outside {MIN_TTL}..={MAX_TTL}", record.ttl),
        ));
    }

    match (record.record_type.requires_priority(), record.priority) {
        (true, None) => Err(CoreError::validation(
            "priority",
            format!("required for {} records", record.record_type),
        )),
        (false, Some(_)) => Err(CoreError::validation(
            "priority",
            format!(
                "only MX and SRV records take a priority, not {}",
                record.record_type
            ),
        )),
        _ => Ok(()),
    }
}
