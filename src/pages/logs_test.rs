use super::*;

fn entry(tool: &str, input: &str) -> LogEntry {
    LogEntry {
        id: "log-1".to_owned(),
        user_id: "u-1".to_owned(),
        tool: tool.to_owned(),
        input_data: input.to_owned(),
        result: serde_json::json!({}),
        timestamp: "2025-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn empty_search_matches_everything() {
    assert!(matches_search(&entry("scan", "api.example.com"), ""));
}

#[test]
fn search_matches_input_data_case_insensitively() {
    let log = entry("scan", "API.Example.com");
    assert!(matches_search(&log, "example"));
    assert!(!matches_search(&log, "other-host"));
}

#[test]
fn search_matches_tool_name() {
    assert!(matches_search(&entry("payload", "x"), "PAY"));
}

#[test]
fn tool_badge_class_maps_known_tools() {
    assert_eq!(tool_badge_class("scan"), "badge badge--scan");
    assert_eq!(tool_badge_class("payload"), "badge badge--payload");
    assert_eq!(tool_badge_class("other"), "badge");
}

#[test]
fn tool_filter_param_maps_all_to_none() {
    assert_eq!(tool_filter_param("all"), None);
    assert_eq!(tool_filter_param("scan"), Some("scan"));
}
