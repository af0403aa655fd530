//! Coarse device detection from the user-agent string.

use once_cell::sync::Lazy;
use regex::Regex;

/// Platform keywords that mark a request as coming from a mobile device.
/// Substring matching is deliberate: vendor targeting only needs a coarse
/// signal, not full UA parsing.
static MOBILE_PLATFORMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)ios|ipod|ipad|iphone|android").expect("mobile platform regex is valid")
});

/// Returns true when the user-agent names a known mobile platform.
#[must_use]
pub fn is_mobile(user_agent: &str) -> bool {
    MOBILE_PLATFORMS.is_match(user_agent)
}

/// OpenRTB-style mobile flag: 1 for mobile user-agents, 0 otherwise.
/// An absent user-agent counts as desktop.
#[must_use]
pub fn mobile_flag(user_agent: Option<&str>) -> u8 {
    u8::from(user_agent.map(is_mobile).unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANDROID_UA: &str =
        "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 Mobile Safari/537.36";
    const IPHONE_UA: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 16_5 like Mac OS X) AppleWebKit/605.1.15";
    const DESKTOP_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0";

    #[test]
    fn detects_android_and_iphone() {
        assert!(is_mobile(ANDROID_UA));
        assert!(is_mobile(IPHONE_UA));
        assert!(is_mobile("Mozilla/5.0 (iPad; CPU OS 15_0 like Mac OS X)"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(is_mobile("SOMETHING ANDROID SOMETHING"));
        assert!(is_mobile("something iphone something"));
    }

    #[test]
    fn desktop_is_not_mobile() {
        assert!(!is_mobile(DESKTOP_UA));
        assert!(!is_mobile(""));
    }

    #[test]
    fn mobile_flag_maps_to_openrtb_values() {
        assert_eq!(mobile_flag(Some(ANDROID_UA)), 1);
        assert_eq!(mobile_flag(Some(DESKTOP_UA)), 0);
        assert_eq!(mobile_flag(None), 0, "missing UA should count as desktop");
    }
}
