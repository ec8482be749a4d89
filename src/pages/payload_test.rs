use super::*;

// =============================================================
// hostname extraction
// =============================================================

#[test]
fn hostname_of_strips_scheme_port_and_path() {
    assert_eq!(
        hostname_of("http://localhost:8080/api/v1"),
        Some("localhost".to_owned())
    );
    assert_eq!(
        hostname_of("https://API.TestCloud.com/path?q=1"),
        Some("api.testcloud.com".to_owned())
    );
}

#[test]
fn hostname_of_accepts_schemeless_input() {
    assert_eq!(hostname_of("staging.local"), Some("staging.local".to_owned()));
    assert_eq!(hostname_of("staging.local:9090"), Some("staging.local".to_owned()));
}

#[test]
fn hostname_of_ignores_userinfo() {
    assert_eq!(
        hostname_of("http://admin:pw@test-env.local/x"),
        Some("test-env.local".to_owned())
    );
}

#[test]
fn hostname_of_rejects_empty_input() {
    assert_eq!(hostname_of(""), None);
    assert_eq!(hostname_of("http://"), None);
}

// =============================================================
// allow list
// =============================================================

#[test]
fn authorized_exact_hostname() {
    assert!(is_authorized_endpoint("http://localhost:3000"));
    assert!(is_authorized_endpoint("api.testcloud.com"));
}

#[test]
fn authorized_subdomain_of_listed_endpoint() {
    assert!(is_authorized_endpoint("https://eu-west.api.testcloud.com/scan"));
}

#[test]
fn unauthorized_unknown_host() {
    assert!(!is_authorized_endpoint("https://evil.com"));
}

#[test]
fn unauthorized_lookalike_suffix_host() {
    // "localhost.evil.com" is not localhost, nor a subdomain of it.
    assert!(!is_authorized_endpoint("http://localhost.evil.com"));
    assert!(!is_authorized_endpoint("http://api.testcloud.com.attacker.io"));
}

#[test]
fn unauthorized_empty_url() {
    assert!(!is_authorized_endpoint(""));
}

// =============================================================
// catalog + badges
// =============================================================

#[test]
fn every_test_type_has_sample_payloads() {
    for kind in &TEST_TYPES {
        assert!(
            !sample_payloads(kind.value).is_empty(),
            "no samples for {}",
            kind.value
        );
    }
}

#[test]
fn unknown_test_type_has_no_samples() {
    assert!(sample_payloads("xss").is_empty());
}

#[test]
fn risk_level_class_is_case_insensitive() {
    assert_eq!(risk_level_class("Critical"), "badge badge--critical");
    assert_eq!(risk_level_class("HIGH"), "badge badge--high");
    assert_eq!(risk_level_class("medium"), "badge badge--medium");
    assert_eq!(risk_level_class("low"), "badge badge--low");
    assert_eq!(risk_level_class("unknown"), "badge");
}
