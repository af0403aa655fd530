//! GDPR and USP consent signals passed through to user syncing.

use serde::{Deserialize, Serialize};

/// GDPR consent as delivered by the host's consent-management plumbing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GdprConsent {
    /// Whether GDPR applies to this user. `None` when the CMP did not say.
    pub gdpr_applies: Option<bool>,
    /// IAB TCF consent string.
    pub consent_string: Option<String>,
}

impl GdprConsent {
    /// Convenience constructor for a fully specified consent signal.
    #[must_use]
    pub fn new(gdpr_applies: bool, consent_string: impl Into<String>) -> Self {
        Self {
            gdpr_applies: Some(gdpr_applies),
            consent_string: Some(consent_string.into()),
        }
    }
}

/// Builds the consent query string attached to user-sync URLs.
///
/// Produces `gdpr=<0|1>&gdpr_consent=<string>` when applicability is a
/// defined boolean, `gdpr_consent=<string>` alone otherwise. A missing
/// consent string serializes as empty.
#[must_use]
pub fn consent_query_params(consent: Option<&GdprConsent>) -> String {
    let consent_string = consent
        .and_then(|c| c.consent_string.as_deref())
        .unwrap_or("");
    let encoded = urlencoding::encode(consent_string);

    match consent.and_then(|c| c.gdpr_applies) {
        Some(applies) => format!("gdpr={}&gdpr_consent={}", u8::from(applies), encoded),
        None => format!("gdpr_consent={}", encoded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_true_includes_gdpr_flag() {
        let consent = GdprConsent::new(true, "abc");
        assert_eq!(
            consent_query_params(Some(&consent)),
            "gdpr=1&gdpr_consent=abc"
        );
    }

    #[test]
    fn applies_false_includes_zero_flag() {
        let consent = GdprConsent::new(false, "abc");
        assert_eq!(
            consent_query_params(Some(&consent)),
            "gdpr=0&gdpr_consent=abc"
        );
    }

    #[test]
    fn undefined_applicability_omits_gdpr_flag() {
        let consent = GdprConsent {
            gdpr_applies: None,
            consent_string: Some("abc".to_string()),
        };
        assert_eq!(consent_query_params(Some(&consent)), "gdpr_consent=abc");
    }

    #[test]
    fn missing_consent_degrades_to_empty_string() {
        assert_eq!(consent_query_params(None), "gdpr_consent=");

        let consent = GdprConsent {
            gdpr_applies: Some(true),
            consent_string: None,
        };
        assert_eq!(consent_query_params(Some(&consent)), "gdpr=1&gdpr_consent=");
    }

    #[test]
    fn consent_string_is_url_encoded() {
        let consent = GdprConsent::new(true, "a b&c");
        assert_eq!(
            consent_query_params(Some(&consent)),
            "gdpr=1&gdpr_consent=a%20b%26c"
        );
    }
}
