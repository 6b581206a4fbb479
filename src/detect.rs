//! Device-class detection over rendered user-agent strings.

/// Tokens that mark a user-agent string as mobile.
pub static MOBILE_PATTERNS: [&str; 20] = [
    // Apple
    "iphone", "ipad", "ipod", "crios", "fxios",
    // Android
    "android", "mobile",
    // Device vendors appearing in model names
    "pixel", "samsung", "sm-", "xiaomi", "redmi", "poco", "oneplus", "oppo", "vivo", "realme",
    "moto", "nokia", "edga",
];

lazy_static::lazy_static! {
    /// Case-insensitive matcher over the mobile tokens.
    pub static ref MOBILE_MATCHER: aho_corasick::AhoCorasick = aho_corasick::AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .build(MOBILE_PATTERNS.as_ref())
        .expect("failed to compile AhoCorasick patterns");
}

/// Returns `true` if the user-agent string claims a mobile device.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_MATCHER.find(user_agent).is_some()
}

/// The first mobile token matched in the user-agent, if any.
pub fn mobile_token(user_agent: &str) -> Option<&'static str> {
    MOBILE_MATCHER
        .find(user_agent)
        .map(|m| MOBILE_PATTERNS[m.pattern().as_usize()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_agents_are_not_mobile() {
        let chrome_win = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
            AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
        let safari_mac = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
            AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15";
        assert!(!is_mobile_user_agent(chrome_win));
        assert!(!is_mobile_user_agent(safari_mac));
    }

    #[test]
    fn mobile_agents_are_detected() {
        let chrome_android = "Mozilla/5.0 (Linux; Android 13; Pixel 8) \
            AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";
        let safari_ios = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
            AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";
        assert!(is_mobile_user_agent(chrome_android));
        assert!(is_mobile_user_agent(safari_ios));
        assert_eq!(mobile_token(safari_ios), Some("iphone"));
    }
}
