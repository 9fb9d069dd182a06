//! hosting.de error mapping
//!
//! The API reports errors as objects carrying a numeric code, the object and
//! field path they refer to, and a text. The code catalogue is not stable
//! enough to key on, so mapping goes by the field path and the text.

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::HostingdeProvider;

const AUTH_MARKERS: &[&str] = &[
    "authentication",
    "auth token",
    "authtoken",
    "invalid token",
    "not authenticated",
    "unauthorized",
];

const PERMISSION_MARKERS: &[&str] = &["permission", "not allowed", "forbidden", "access denied"];

const NOT_FOUND_MARKERS: &[&str] = &["not found", "does not exist"];

fn contains_any(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| text.contains(m))
}

impl ProviderErrorMapper for HostingdeProvider {
    fn provider_name(&self) -> &'static str {
        crate::PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        map_raw_error(self.provider_name(), raw, context)
    }
}

/// Mapping used by [`HostingdeProvider`]'s [`ProviderErrorMapper`] impl.
fn map_raw_error(provider: &str, raw: RawApiError, context: ErrorContext) -> ProviderError {
    let text = raw.message.to_lowercase();

    if contains_any(&text, AUTH_MARKERS) {
        return ProviderError::InvalidCredentials {
            provider: provider.to_string(),
            raw_message: Some(raw.message),
        };
    }

    // Field-scoped errors name the offending field, whatever their text
    if let Some(param) = raw.context_path.clone() {
        let detail = match (&raw.value, &context.record_name) {
            (Some(value), _) => format!("{} (value: {value})", raw.message),
            (None, Some(name)) => format!("{} (record: {name})", raw.message),
            (None, None) => raw.message.clone(),
        };
        return ProviderError::InvalidParameter {
            provider: provider.to_string(),
            param,
            detail,
        };
    }

    if contains_any(&text, PERMISSION_MARKERS) {
        return ProviderError::PermissionDenied {
            provider: provider.to_string(),
            raw_message: Some(raw.message),
        };
    }

    if contains_any(&text, NOT_FOUND_MARKERS) {
        if let Some(record_id) = context.record_id {
            return ProviderError::RecordNotFound {
                provider: provider.to_string(),
                record_id,
                raw_message: Some(raw.message),
            };
        }
        if let Some(domain) = context.zone_id {
            return ProviderError::DomainNotFound {
                provider: provider.to_string(),
                domain,
                raw_message: Some(raw.message),
            };
        }
    }

    ProviderError::ApiError {
        provider: provider.to_string(),
        raw_code: raw.code,
        context_object: raw.context_object,
        context_path: raw.context_path,
        raw_message: raw.message,
        details: raw.details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApiErrorDetail;

    fn raw(code: i64, message: &str) -> RawApiError {
        RawApiError {
            code: Some(code),
            ..RawApiError::new(message)
        }
    }

    fn map(raw: RawApiError, context: ErrorContext) -> ProviderError {
        map_raw_error("hostingde", raw, context)
    }

    #[test]
    fn authentication_failure() {
        let err = map(raw(10100, "Authentication failed"), ErrorContext::default());
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn permission_denied() {
        let err = map(
            raw(10101, "You do not have permission to perform this action"),
            ErrorContext::default(),
        );
        assert!(matches!(err, ProviderError::PermissionDenied { .. }));
    }

    #[test]
    fn missing_record_with_record_context() {
        let ctx = ErrorContext {
            record_id: Some("r-1".to_string()),
            zone_id: Some("zc-1".to_string()),
            ..Default::default()
        };
        let err = map(raw(20000, "Record does not exist"), ctx);
        assert!(
            matches!(&err, ProviderError::RecordNotFound { record_id, .. } if record_id == "r-1"),
            "{err:?}"
        );
    }

    #[test]
    fn missing_zone_with_zone_context() {
        let ctx = ErrorContext {
            zone_id: Some("zc-1".to_string()),
            ..Default::default()
        };
        let err = map(raw(20001, "Zone config not found"), ctx);
        assert!(
            matches!(&err, ProviderError::DomainNotFound { domain, .. } if domain == "zc-1"),
            "{err:?}"
        );
    }

    #[test]
    fn field_error_becomes_invalid_parameter() {
        let error = RawApiError {
            context_path: Some("recordsToAdd[0].ttl".to_string()),
            value: Some("5".to_string()),
            ..raw(10205, "Value out of range")
        };
        let err = map(error, ErrorContext::default());
        match err {
            ProviderError::InvalidParameter { param, detail, .. } => {
                assert_eq!(param, "recordsToAdd[0].ttl");
                assert_eq!(detail, "Value out of range (value: 5)");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn unrecognised_error_keeps_structure() {
        let error = RawApiError {
            context_object: Some("zoneConfig".to_string()),
            details: vec![ApiErrorDetail {
                key: "limit".to_string(),
                value: "1000".to_string(),
            }],
            ..raw(30000, "Record limit reached")
        };
        let err = map(error, ErrorContext::default());
        match err {
            ProviderError::ApiError {
                raw_code,
                context_object,
                details,
                ..
            } => {
                assert_eq!(raw_code, Some(30000));
                assert_eq!(context_object.as_deref(), Some("zoneConfig"));
                assert_eq!(details.len(), 1);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn field_scoped_not_found_stays_invalid_parameter() {
        let error = RawApiError {
            context_path: Some("ownerAccountId".to_string()),
            ..raw(20002, "Account does not exist")
        };
        let ctx = ErrorContext {
            record_id: Some("r-1".to_string()),
            ..Default::default()
        };
        let err = map(error, ctx);
        assert!(
            matches!(&err, ProviderError::InvalidParameter { param, .. } if param == "ownerAccountId"),
            "{err:?}"
        );
    }

    #[test]
    fn field_scoped_not_allowed_stays_invalid_parameter() {
        let error = RawApiError {
            context_path: Some("recordsToAdd[0].content".to_string()),
            ..raw(10206, "Value not allowed")
        };
        let err = map(error, ErrorContext::default());
        assert!(
            matches!(&err, ProviderError::InvalidParameter { param, .. } if param == "recordsToAdd[0].content"),
            "{err:?}"
        );
    }

    #[test]
    fn not_found_without_context_falls_through() {
        let err = map(raw(20000, "Object not found"), ErrorContext::default());
        assert!(matches!(err, ProviderError::ApiError { .. }));
    }
}
