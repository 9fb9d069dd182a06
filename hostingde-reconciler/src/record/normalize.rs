//! Canonical comparison form of record content

/// Quote-joined segment separator the API inserts into long TXT values.
const SEGMENT_JOIN: &str = "\" \"";

/// Strip the quoting the API applies to textual content.
///
/// Removes every `" "` segment join, then every remaining `"`. The result
/// contains no `"`, so applying it twice changes nothing.
///
/// ```rust
/// use hostingde_reconciler::record::normalize_content;
///
/// assert_eq!(normalize_content("\"v=spf1 \" \"-all\""), "v=spf1 -all");
/// ```
pub fn normalize_content(content: &str) -> String {
    content.replace(SEGMENT_JOIN, "").replace('"', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_segments_collapse() {
        assert_eq!(normalize_content("\"foo\" \"bar\""), "foobar");
    }

    #[test]
    fn wrapping_quotes_removed() {
        assert_eq!(normalize_content("\"txt value\""), "txt value");
    }

    #[test]
    fn plain_content_unchanged() {
        assert_eq!(normalize_content("plain"), "plain");
        assert_eq!(normalize_content(""), "");
        assert_eq!(normalize_content("10 mx.example.com"), "10 mx.example.com");
    }

    #[test]
    fn stray_quotes_removed() {
        assert_eq!(normalize_content("a\"b\"\"c"), "abc");
        assert_eq!(normalize_content("\" \""), "");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "",
            "plain",
            "\"",
            "\"\"",
            "\" \"",
            "\"foo\" \"bar\"",
            "\"a\" \"b\" \"c\"",
            "\"\" \"\" \"",
            "x\" \" \"y",
            "\"v=DKIM1; k=rsa; p=MIGf\" \"MA0GCSqGSIb3\"",
            "ünïcödé \"quoted\"",
        ];
        for s in samples {
            let once = normalize_content(s);
            assert_eq!(normalize_content(&once), once, "input: {s:?}");
            assert!(!once.contains('"'), "input: {s:?}");
        }
    }
}
