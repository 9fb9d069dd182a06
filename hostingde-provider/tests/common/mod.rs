//! Shared helpers for the live API tests

#![allow(dead_code)]

use std::env;

use hostingde_provider::{
    DnsRecord, Filter, FindQuery, HostingdeProvider, ProviderCredentials, RecordsApi,
    RecordsUpdateRequest, Result,
};

pub const AUTH_TOKEN_VAR: &str = "HOSTINGDE_AUTH_TOKEN";
pub const ZONE_CONFIG_ID_VAR: &str = "HOSTINGDE_ZONE_CONFIG_ID";
pub const ACCOUNT_ID_VAR: &str = "HOSTINGDE_ACCOUNT_ID";

/// Return early from a test when a required environment variable is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping: environment variable {} not set", $var);
                return;
            }
        )+
    };
}

/// Assert that an `Option` is `Some` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Unique label for a throwaway test record.
pub fn generate_test_record_label() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// Live test context: a client plus the zone config the tests write into.
pub struct TestContext {
    pub provider: HostingdeProvider,
    pub zone_config_id: String,
    zone_name: Option<String>,
}

impl TestContext {
    pub fn from_env() -> Option<Self> {
        let auth_token = env::var(AUTH_TOKEN_VAR).ok()?;
        let zone_config_id = env::var(ZONE_CONFIG_ID_VAR).ok()?;

        let mut credentials = ProviderCredentials::new(auth_token);
        if let Ok(account_id) = env::var(ACCOUNT_ID_VAR) {
            credentials = credentials.with_account_id(account_id);
        }

        let provider = HostingdeProvider::new(credentials).ok()?;
        Some(Self {
            provider,
            zone_config_id,
            zone_name: None,
        })
    }

    /// Zone name of the configured zone config (cached after the first lookup).
    pub async fn zone_name(&mut self) -> Option<String> {
        use hostingde_provider::ZonesApi;

        if self.zone_name.is_none() {
            let query = FindQuery::new()
                .filter(Filter::new("ZoneConfigId", self.zone_config_id.clone()))
                .limit(1);
            let page = self.provider.find_zone_configs(&query).await.ok()?;
            self.zone_name = page.items.into_iter().next().map(|z| z.name);
        }
        self.zone_name.clone()
    }

    /// Look a record up by id.
    pub async fn find_record(&self, id: &str) -> Result<Option<DnsRecord>> {
        let query = FindQuery::new()
            .filter(Filter::new("RecordId", id))
            .limit(1)
            .page(1);
        Ok(self.provider.find_records(&query).await?.items.into_iter().next())
    }

    /// Best-effort removal of a record created by a test.
    pub async fn cleanup_record(&self, id: &str, name: &str, record_type: &str) {
        let request = RecordsUpdateRequest::new(self.zone_config_id.clone()).delete(DnsRecord {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            record_type: Some(record_type.to_string()),
            ..Default::default()
        });
        if let Err(e) = self.provider.batch_update_records(&request).await {
            eprintln!("cleanup of {name} ({id}) failed: {e}");
        }
    }
}
