use super::*;

fn cve(severity: &str, tags: &[&str]) -> Cve {
    Cve {
        id: "CVE-2024-0001".to_owned(),
        description: "test record".to_owned(),
        severity: severity.to_owned(),
        tags: tags.iter().map(|&t| t.to_owned()).collect(),
        reference: String::new(),
        published_date: "2024-01-01".to_owned(),
    }
}

#[test]
fn severity_class_covers_all_levels() {
    assert_eq!(severity_class("critical"), "badge badge--critical");
    assert_eq!(severity_class("High"), "badge badge--high");
    assert_eq!(severity_class("MEDIUM"), "badge badge--medium");
    assert_eq!(severity_class("low"), "badge badge--low");
    assert_eq!(severity_class("informational"), "badge");
}

#[test]
fn severity_param_maps_all_to_none() {
    assert_eq!(severity_param("all"), None);
    assert_eq!(severity_param("critical"), Some("critical"));
}

#[test]
fn empty_tag_matches_everything() {
    assert!(matches_tag(&cve("high", &["cloud"]), ""));
    assert!(matches_tag(&cve("high", &[]), ""));
}

#[test]
fn tag_filter_requires_exact_tag() {
    let record = cve("high", &["cloud", "rce"]);
    assert!(matches_tag(&record, "rce"));
    assert!(!matches_tag(&record, "rc"));
    assert!(!matches_tag(&record, "xss"));
}
