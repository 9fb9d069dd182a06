//! Log sanitization utilities
//!
//! Keeps auth tokens out of debug logs and caps the size of logged bodies
//! (zones with many TXT/DKIM records produce large responses).

use serde_json::Value;

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Request fields whose values never reach the log.
const SECRET_FIELDS: [&str; 1] = ["authToken"];

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes (on a char boundary) with a suffix giving the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Render a request body for logging with secret fields masked.
pub fn redact_request_body(body: &Value) -> String {
    let mut body = body.clone();
    if let Value::Object(map) = &mut body {
        for field in SECRET_FIELDS {
            if let Some(value) = map.get_mut(field) {
                *value = Value::String("***".to_string());
            }
        }
    }
    truncate_for_log(&body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains(&format!("total {} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "ä".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total"));
    }

    #[test]
    fn auth_token_masked() {
        let body = serde_json::json!({
            "authToken": "very-secret",
            "zoneConfigId": "zc-1",
        });
        let logged = redact_request_body(&body);
        assert!(!logged.contains("very-secret"));
        assert!(logged.contains("\"authToken\":\"***\""));
        assert!(logged.contains("zc-1"));
    }

    #[test]
    fn body_without_token_untouched() {
        let body = serde_json::json!({"limit": 1});
        assert_eq!(redact_request_body(&body), r#"{"limit":1}"#);
    }
}
