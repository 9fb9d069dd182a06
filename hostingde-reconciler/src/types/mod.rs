//! Type definition module

mod record;

pub use record::{
    DesiredRecord, ObservedRecord, RecordRef, RecordState, RefreshOutcome, DEFAULT_TTL,
};

// Re-export the provider library's public types
pub use hostingde_provider::{
    DnsRecord, Filter, FilterOrChain, FindQuery, PaginatedResponse, ProviderCredentials,
    RecordType, RecordsUpdateRequest, Zone, ZoneConfig,
};
