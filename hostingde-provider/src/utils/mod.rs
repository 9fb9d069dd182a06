//! Utility modules.

/// `lastChangeDate` serialization helpers.
pub mod datetime;

/// Log sanitization to keep tokens and oversized bodies out of logs.
pub mod log_sanitizer;
