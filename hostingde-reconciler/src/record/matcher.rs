//! Identify a just-written record in a zone's returned record set
//!
//! `recordsUpdate` answers with every record of the zone. The written record
//! is found among those sharing its name and type, by content: an exact
//! match first, then a match after [`normalize_content`]. Both passes run over
//! the whole name+type subset, so an exact match wins regardless of where it
//! sits in the response.

use super::normalize::normalize_content;
use crate::types::{DesiredRecord, ObservedRecord};

/// How the selected record's content related to the desired content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    /// Matched after normalization; the record's content was replaced by its
    /// normalized form.
    Normalized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMatch {
    pub record: ObservedRecord,
    pub kind: MatchKind,
}

/// Select the record in `candidates` that represents `desired`.
///
/// `None` when no candidate shares name and type with `desired`, or none of
/// those carries its content in either form. Ties within a pass go to the
/// first candidate in response order.
pub fn match_record(desired: &DesiredRecord, candidates: &[ObservedRecord]) -> Option<RecordMatch> {
    if let Some(record) = same_identity(desired, candidates).find(|c| c.content == desired.content) {
        return Some(RecordMatch {
            record: record.clone(),
            kind: MatchKind::Exact,
        });
    }

    same_identity(desired, candidates).find_map(|c| {
        let normalized = normalize_content(&c.content);
        (normalized == desired.content).then(|| RecordMatch {
            record: ObservedRecord {
                content: normalized,
                ..c.clone()
            },
            kind: MatchKind::Normalized,
        })
    })
}

/// Candidates sharing name and type with `desired`, in response order.
fn same_identity<'a>(
    desired: &'a DesiredRecord,
    candidates: &'a [ObservedRecord],
) -> impl Iterator<Item = &'a ObservedRecord> + 'a {
    candidates.iter().filter(move |c| {
        c.name == desired.name && c.record_type.eq_ignore_ascii_case(desired.record_type.as_str())
    })
}
