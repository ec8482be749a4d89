use super::*;
use crate::util::session::MemorySessionStore;

fn sample_user() -> User {
    User {
        id: "1".to_owned(),
        email: "a@b.com".to_owned(),
        created_at: "2025-01-01T00:00:00Z".to_owned(),
    }
}

fn unauthorized() -> ApiError {
    ApiError {
        status: Some(401),
        message: "Could not validate credentials".to_owned(),
    }
}

fn network_error() -> ApiError {
    ApiError {
        status: None,
        message: "Session verification failed".to_owned(),
    }
}

// =============================================================
// bootstrap
// =============================================================

#[test]
fn bootstrap_without_session_is_anonymous() {
    let store = MemorySessionStore::new();
    let state = AuthState::bootstrap(&store);
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn bootstrap_with_session_is_cached_immediately() {
    let store = MemorySessionStore::new();
    store.save("abc", &sample_user(), 7);

    let state = AuthState::bootstrap(&store);
    assert_eq!(state.phase, AuthPhase::Cached);
    assert_eq!(state.user, Some(sample_user()));
    assert!(state.is_authenticated());
}

#[test]
fn bootstrap_with_corrupt_user_is_anonymous() {
    let store = MemorySessionStore::new();
    store.set_raw_token("abc");
    store.set_raw_user("{invalid json");

    let state = AuthState::bootstrap(&store);
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert!(state.user.is_none());
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_stores_session_and_verifies() {
    let store = MemorySessionStore::new();
    let mut state = AuthState::default();

    state.complete_login(&store, "abc", sample_user());

    assert_eq!(state.phase, AuthPhase::Verified);
    let session = store.read().unwrap();
    assert_eq!(session.token, "abc");
    assert_eq!(session.user, sample_user());
}

#[test]
fn login_round_trips_current_user() {
    let store = MemorySessionStore::new();
    let mut state = AuthState::default();
    state.complete_login(&store, "abc", sample_user());

    // The just-stored user is what bootstrap reads back.
    let reloaded = AuthState::bootstrap(&store);
    assert_eq!(reloaded.user, Some(sample_user()));
}

#[test]
fn logout_clears_store_and_user() {
    let store = MemorySessionStore::new();
    let mut state = AuthState::default();
    state.complete_login(&store, "abc", sample_user());

    state.logout(&store);

    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert!(state.user.is_none());
    assert!(!store.has_session());
}

#[test]
fn logout_twice_is_idempotent() {
    let store = MemorySessionStore::new();
    let mut state = AuthState::default();
    state.complete_login(&store, "abc", sample_user());

    state.logout(&store);
    state.logout(&store);

    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert!(!store.has_session());
}

// =============================================================
// verification
// =============================================================

#[test]
fn verify_success_refreshes_stored_user() {
    let store = MemorySessionStore::new();
    let mut state = AuthState::default();
    state.complete_login(&store, "abc", sample_user());

    let refreshed = User {
        email: "renamed@b.com".to_owned(),
        ..sample_user()
    };
    state.apply_verify_success(&store, refreshed.clone());

    assert_eq!(state.phase, AuthPhase::Verified);
    assert_eq!(state.user, Some(refreshed.clone()));
    let session = store.read().unwrap();
    assert_eq!(session.token, "abc");
    assert_eq!(session.user, refreshed);
}

#[test]
fn late_verify_success_does_not_resurrect_cleared_session() {
    let store = MemorySessionStore::new();
    let mut state = AuthState::default();
    state.complete_login(&store, "abc", sample_user());
    state.logout(&store);

    // The in-flight verification resolves after logout.
    state.apply_verify_success(&store, sample_user());

    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert!(state.user.is_none());
    assert!(!store.has_session());
}

#[test]
fn verify_401_expires_session() {
    let store = MemorySessionStore::new();
    let mut state = AuthState::default();
    state.complete_login(&store, "abc", sample_user());

    let disposition = state.apply_verify_failure(&store, &unauthorized());

    assert_eq!(disposition, VerifyDisposition::SessionExpired);
    assert_eq!(state.phase, AuthPhase::Expired);
    assert!(state.user.is_none());
    assert!(!store.has_session());
}

#[test]
fn verify_network_error_keeps_cached_user() {
    let store = MemorySessionStore::new();
    store.save("abc", &sample_user(), 7);
    let mut state = AuthState::bootstrap(&store);

    let disposition = state.apply_verify_failure(&store, &network_error());

    assert_eq!(disposition, VerifyDisposition::KeepCached);
    assert_eq!(state.phase, AuthPhase::Cached);
    assert_eq!(state.user, Some(sample_user()));
    assert!(store.has_session());
}

#[test]
fn verify_server_error_keeps_cached_user() {
    let store = MemorySessionStore::new();
    store.save("abc", &sample_user(), 7);
    let mut state = AuthState::bootstrap(&store);

    let err = ApiError {
        status: Some(503),
        message: "Database service unavailable".to_owned(),
    };
    assert_eq!(
        state.apply_verify_failure(&store, &err),
        VerifyDisposition::KeepCached
    );
    assert!(store.has_session());
}

#[test]
fn duplicate_verify_401_is_idempotent() {
    let store = MemorySessionStore::new();
    let mut state = AuthState::default();
    state.complete_login(&store, "abc", sample_user());

    // Two overlapping verifications both came back 401.
    state.apply_verify_failure(&store, &unauthorized());
    let disposition = state.apply_verify_failure(&store, &unauthorized());

    assert_eq!(disposition, VerifyDisposition::SessionExpired);
    assert_eq!(state.phase, AuthPhase::Expired);
    assert!(!store.has_session());
}

#[test]
fn duplicate_verify_success_is_a_harmless_refresh() {
    let store = MemorySessionStore::new();
    let mut state = AuthState::default();
    state.complete_login(&store, "abc", sample_user());

    state.apply_verify_success(&store, sample_user());
    state.apply_verify_success(&store, sample_user());

    assert_eq!(state.phase, AuthPhase::Verified);
    assert_eq!(store.read().unwrap().token, "abc");
}
