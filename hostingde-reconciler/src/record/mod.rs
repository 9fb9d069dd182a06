//! Record matching, normalization, diffing and validation
//!
//! Pure functions; the remote calls live in [`RecordService`](crate::services::RecordService).

mod diff;
mod matcher;
mod normalize;
mod validation;

pub use diff::{build_diff, build_lookup_filter, RECORD_ID_FIELD};
pub use matcher::{match_record, MatchKind, RecordMatch};
pub use normalize::normalize_content;
pub use validation::{validate_record, MAX_TTL, MIN_TTL};
