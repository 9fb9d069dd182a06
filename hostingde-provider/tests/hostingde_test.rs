//! hosting.de live API tests
//!
//! Run with:
//! ```bash
//! HOSTINGDE_AUTH_TOKEN=xxx HOSTINGDE_ZONE_CONFIG_ID=xxx \
//!     cargo test -p hostingde-provider --test hostingde_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::{AUTH_TOKEN_VAR, TestContext, ZONE_CONFIG_ID_VAR, generate_test_record_label};
use hostingde_provider::{
    DnsRecord, FindQuery, HostingdeProvider, ProviderCredentials, ProviderError, RecordsApi,
    RecordsUpdateRequest, ZonesApi,
};

#[tokio::test]
#[ignore]
async fn test_hostingde_validate_credentials() {
    skip_if_no_credentials!(AUTH_TOKEN_VAR, ZONE_CONFIG_ID_VAR);

    let ctx = require_some!(TestContext::from_env(), "failed to build test context");
    let valid = require_ok!(ctx.provider.validate_credentials().await);
    assert!(valid, "credentials should be accepted");
}

#[tokio::test]
#[ignore]
async fn test_hostingde_rejects_bad_token() {
    let provider = require_ok!(HostingdeProvider::new(ProviderCredentials::new(
        "definitely-not-a-token"
    )));
    let result = provider.validate_credentials().await;
    assert!(
        matches!(result, Ok(false) | Err(ProviderError::PermissionDenied { .. })),
        "unexpected result: {result:?}"
    );
}

#[tokio::test]
#[ignore]
async fn test_hostingde_find_zone_configs() {
    skip_if_no_credentials!(AUTH_TOKEN_VAR, ZONE_CONFIG_ID_VAR);

    let ctx = require_some!(TestContext::from_env());
    let page = require_ok!(ctx.provider.find_zone_configs(&FindQuery::new()).await);
    assert!(!page.items.is_empty(), "account should have at least one zone");
    assert!(
        page.items.iter().any(|z| z.id == ctx.zone_config_id),
        "configured zone config not listed on the first page"
    );
}

#[tokio::test]
#[ignore]
async fn test_hostingde_find_unknown_record() {
    skip_if_no_credentials!(AUTH_TOKEN_VAR, ZONE_CONFIG_ID_VAR);

    let ctx = require_some!(TestContext::from_env());
    let found = require_ok!(ctx.find_record("00000000000000000000000000000000").await);
    assert!(found.is_none());
}

#[tokio::test]
#[ignore]
async fn test_hostingde_txt_record_lifecycle() {
    skip_if_no_credentials!(AUTH_TOKEN_VAR, ZONE_CONFIG_ID_VAR);

    let mut ctx = require_some!(TestContext::from_env());
    let zone_name = require_some!(ctx.zone_name().await, "zone name lookup failed");
    let name = format!("{}.{zone_name}", generate_test_record_label());

    // Create
    let request = RecordsUpdateRequest::new(ctx.zone_config_id.clone()).add(DnsRecord {
        name: Some(name.clone()),
        record_type: Some("TXT".to_string()),
        content: Some("hostingde-provider test".to_string()),
        ttl: Some(3600),
        ..Default::default()
    });
    let zone = require_ok!(ctx.provider.batch_update_records(&request).await);
    let created = require_some!(
        zone.records
            .iter()
            .find(|r| r.name.as_deref() == Some(name.as_str())),
        "created record missing from the zone"
    );
    let id = require_some!(created.id.clone());

    // Read back
    let found = ctx.find_record(&id).await;
    let found = match found {
        Ok(Some(record)) => record,
        other => {
            ctx.cleanup_record(&id, &name, "TXT").await;
            panic!("lookup of created record failed: {other:?}");
        }
    };
    assert_eq!(found.record_type.as_deref(), Some("TXT"));
    assert_eq!(found.ttl, Some(3600));

    // Modify
    let modify = RecordsUpdateRequest::new(ctx.zone_config_id.clone()).modify(DnsRecord {
        id: Some(id.clone()),
        name: Some(name.clone()),
        record_type: Some("TXT".to_string()),
        content: Some("hostingde-provider test updated".to_string()),
        ttl: Some(7200),
        ..Default::default()
    });
    let modified = ctx.provider.batch_update_records(&modify).await;
    assert!(modified.is_ok(), "modify failed: {modified:?}");

    // Delete
    ctx.cleanup_record(&id, &name, "TXT").await;
    let gone = require_ok!(ctx.find_record(&id).await);
    assert!(gone.is_none(), "record still present after delete");
}
