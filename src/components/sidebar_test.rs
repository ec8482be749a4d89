use super::*;

#[test]
fn navigation_covers_every_tool_route() {
    let hrefs: Vec<&str> = NAVIGATION.iter().map(|entry| entry.href).collect();
    assert_eq!(
        hrefs,
        vec!["/dashboard", "/scan", "/payload", "/logs", "/cves", "/setup"]
    );
}

#[test]
fn is_active_matches_exact_path_only() {
    assert!(is_active("/scan", "/scan"));
    assert!(!is_active("/scan", "/logs"));
    assert!(!is_active("/scan/extra", "/scan"));
}
