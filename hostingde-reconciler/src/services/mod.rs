//! Business logic service layer

mod record_service;

pub use record_service::{ReconcilerOptions, RecordService};
