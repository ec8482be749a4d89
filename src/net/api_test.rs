use super::*;

#[test]
fn api_url_joins_base_and_path() {
    assert_eq!(
        api_url_with_base("http://localhost:8000", "/login"),
        "http://localhost:8000/api/login"
    );
}

#[test]
fn log_endpoint_formats_expected_path() {
    assert_eq!(log_endpoint("log-42"), "/logs/log-42");
}

#[test]
fn cve_search_endpoint_formats_expected_path() {
    assert_eq!(cve_search_endpoint("injection"), "/cves/search/injection");
}

#[test]
fn error_detail_prefers_backend_message() {
    assert_eq!(
        error_detail(r#"{"detail": "Email already registered"}"#, "Registration failed"),
        "Email already registered"
    );
}

#[test]
fn error_detail_falls_back_on_missing_field() {
    assert_eq!(
        error_detail(r#"{"error": "nope"}"#, "Login failed"),
        "Login failed"
    );
}

#[test]
fn error_detail_falls_back_on_invalid_json() {
    assert_eq!(error_detail("<html>502</html>", "Login failed"), "Login failed");
}

#[test]
fn error_detail_falls_back_on_non_string_detail() {
    assert_eq!(error_detail(r#"{"detail": 42}"#, "Login failed"), "Login failed");
}

#[test]
fn logs_query_always_paginates() {
    assert_eq!(
        logs_query(None, 50, 0),
        vec![
            ("limit".to_owned(), "50".to_owned()),
            ("offset".to_owned(), "0".to_owned()),
        ]
    );
}

#[test]
fn logs_query_includes_tool_filter() {
    let query = logs_query(Some("scan"), 50, 10);
    assert!(query.contains(&("tool".to_owned(), "scan".to_owned())));
    assert!(query.contains(&("offset".to_owned(), "10".to_owned())));
}

#[test]
fn cves_query_includes_optional_filters() {
    assert_eq!(cves_query(None, None, 20).len(), 1);
    let query = cves_query(Some("critical"), Some("cloud"), 20);
    assert!(query.contains(&("severity".to_owned(), "critical".to_owned())));
    assert!(query.contains(&("tag".to_owned(), "cloud".to_owned())));
}

#[test]
fn is_unauthorized_only_matches_401() {
    assert!(is_unauthorized(Some(401)));
    assert!(!is_unauthorized(Some(403)));
    assert!(!is_unauthorized(Some(500)));
    assert!(!is_unauthorized(None));
}

#[test]
fn api_error_displays_message() {
    let err = ApiError {
        status: Some(503),
        message: "Database service unavailable".to_owned(),
    };
    assert_eq!(err.to_string(), "Database service unavailable");
}
