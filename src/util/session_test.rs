use super::*;

fn sample_user() -> User {
    User {
        id: "1".to_owned(),
        email: "a@b.com".to_owned(),
        created_at: "2025-01-01T00:00:00Z".to_owned(),
    }
}

// =============================================================
// session_from_parts
// =============================================================

#[test]
fn session_requires_both_halves() {
    let user_json = serde_json::to_string(&sample_user()).unwrap();
    assert!(session_from_parts(Some("abc".to_owned()), Some(user_json)).is_some());
    assert!(session_from_parts(Some("abc".to_owned()), None).is_none());
    assert!(session_from_parts(None, Some("{}".to_owned())).is_none());
    assert!(session_from_parts(None, None).is_none());
}

#[test]
fn session_rejects_empty_values() {
    let user_json = serde_json::to_string(&sample_user()).unwrap();
    assert!(session_from_parts(Some(String::new()), Some(user_json)).is_none());
    assert!(session_from_parts(Some("abc".to_owned()), Some(String::new())).is_none());
}

#[test]
fn corrupt_user_json_is_no_session_not_a_crash() {
    let session = session_from_parts(Some("abc".to_owned()), Some("{not json".to_owned()));
    assert!(session.is_none());
}

// =============================================================
// cookie strings
// =============================================================

#[test]
fn set_cookie_string_carries_security_attributes() {
    let cookie = set_cookie_string("token", "abc", 7 * SECS_PER_DAY);
    assert_eq!(
        cookie,
        "token=abc; Max-Age=604800; Path=/; Secure; SameSite=Strict"
    );
}

#[test]
fn clear_cookie_string_expires_immediately() {
    assert!(clear_cookie_string("user").starts_with("user=; Max-Age=0;"));
}

#[test]
fn cookie_value_finds_named_pair() {
    let cookies = "token=abc; user=%7B%22id%22%3A%221%22%7D; theme=dark";
    assert_eq!(cookie_value(cookies, "token"), Some("abc".to_owned()));
    assert_eq!(
        cookie_value(cookies, "user"),
        Some("%7B%22id%22%3A%221%22%7D".to_owned())
    );
    assert_eq!(cookie_value(cookies, "missing"), None);
}

#[test]
fn cookie_value_does_not_match_name_prefixes() {
    assert_eq!(cookie_value("tokenish=zzz; token=abc", "token"), Some("abc".to_owned()));
}

// =============================================================
// MemorySessionStore (the injectable double)
// =============================================================

#[test]
fn save_then_read_round_trips() {
    let store = MemorySessionStore::new();
    store.save("abc", &sample_user(), SESSION_TTL_DAYS);
    let session = store.read().unwrap();
    assert_eq!(session.token, "abc");
    assert_eq!(session.user, sample_user());
}

#[test]
fn has_session_requires_token_and_user() {
    let store = MemorySessionStore::new();
    assert!(!store.has_session());

    store.set_raw_token("abc");
    assert!(!store.has_session());

    store.set_raw_user(&serde_json::to_string(&sample_user()).unwrap());
    assert!(store.has_session());
}

#[test]
fn corrupt_user_cookie_means_no_session() {
    let store = MemorySessionStore::new();
    store.set_raw_token("abc");
    store.set_raw_user("{invalid json");
    assert_eq!(store.read(), None);
    assert!(!store.has_session());
}

#[test]
fn clear_removes_stored_session() {
    let store = MemorySessionStore::new();
    store.save("abc", &sample_user(), SESSION_TTL_DAYS);
    store.clear();
    assert_eq!(store.read(), None);
    assert!(!store.has_session());
}

#[test]
fn clear_is_idempotent() {
    let store = MemorySessionStore::new();
    store.save("abc", &sample_user(), SESSION_TTL_DAYS);
    store.clear();
    store.clear();
    assert!(!store.has_session());
}

#[test]
fn save_replaces_whole_record() {
    let store = MemorySessionStore::new();
    store.save("abc", &sample_user(), SESSION_TTL_DAYS);

    let refreshed = User {
        email: "new@b.com".to_owned(),
        ..sample_user()
    };
    store.save("def", &refreshed, SESSION_TTL_DAYS);

    let session = store.read().unwrap();
    assert_eq!(session.token, "def");
    assert_eq!(session.user.email, "new@b.com");
}
