//! hosting.de DNS record reconciler
//!
//! Reconciles a declared DNS record against the records held by the
//! hosting.de DNS API:
//! - [`record`]: content normalization, identification of a written record in
//!   a zone's returned record set, lookup filters and batch diffs, validation
//! - [`RecordService`]: create, read, update, delete, import and refresh over
//!   any [`RecordsApi`](hostingde_provider::RecordsApi) implementation
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use hostingde_provider::{HostingdeProvider, ProviderCredentials, RecordType};
//! use hostingde_reconciler::{DesiredRecord, RecordService};
//!
//! # async fn example() -> hostingde_reconciler::CoreResult<()> {
//! let provider = HostingdeProvider::new(ProviderCredentials::new("your-auth-token"))?;
//! let service = RecordService::new(Arc::new(provider));
//!
//! let desired = DesiredRecord::new("zone-config-id", "mail.example.com", RecordType::Mx, "mx.example.com")
//!     .with_priority(10);
//! let state = service.create(&desired).await?;
//! println!("created {}", state.id);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod record;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, ProviderError};
pub use services::{ReconcilerOptions, RecordService};
pub use types::{DesiredRecord, ObservedRecord, RecordRef, RecordState, RefreshOutcome};
