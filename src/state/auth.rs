//! Auth-session state machine for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages render optimistically from the cached session while a
//! background verification reconciles against the backend. Only an
//! authoritative 401 logs the user out; transient failures keep the
//! cached identity on screen.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::{ApiError, is_unauthorized};
use crate::net::types::User;
use crate::util::session::{SESSION_TTL_DAYS, SessionStore};

/// Where the current identity stands relative to the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// No session.
    #[default]
    Anonymous,
    /// A stored session was loaded; not yet confirmed this page load.
    Cached,
    /// The backend confirmed the session this page load.
    Verified,
    /// The backend rejected the session; teardown is in progress.
    Expired,
}

/// What a failed verification means for the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyDisposition {
    /// Transient failure; keep rendering the cached user.
    KeepCached,
    /// Authoritative rejection; the session is gone, redirect to login.
    SessionExpired,
}

/// Authentication state tracking the current user and its verification
/// phase. Held in an `RwSignal` context and mutated through the
/// transition methods below, each of which keeps the session store and
/// the in-memory view consistent.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub phase: AuthPhase,
}

impl AuthState {
    /// Synchronous load of the stored session; never waits on the
    /// network, so guarded pages can paint the cached user immediately.
    pub fn bootstrap(store: &dyn SessionStore) -> Self {
        match store.read() {
            Some(session) => Self {
                user: Some(session.user),
                phase: AuthPhase::Cached,
            },
            None => Self::default(),
        }
    }

    /// Login succeeded: persist the session atomically and trust it as
    /// verified.
    pub fn complete_login(&mut self, store: &dyn SessionStore, token: &str, user: User) {
        store.save(token, &user, SESSION_TTL_DAYS);
        self.user = Some(user);
        self.phase = AuthPhase::Verified;
    }

    /// Background verification returned a fresh user snapshot: refresh
    /// the stored copy and promote to verified.
    ///
    /// Ignored when the session went away mid-flight (logout, or a 401
    /// on a concurrent call); a late response must not resurrect it.
    pub fn apply_verify_success(&mut self, store: &dyn SessionStore, user: User) {
        if !matches!(self.phase, AuthPhase::Cached | AuthPhase::Verified) {
            return;
        }
        let Some(session) = store.read() else {
            return;
        };
        store.save(&session.token, &user, SESSION_TTL_DAYS);
        self.user = Some(user);
        self.phase = AuthPhase::Verified;
    }

    /// Background verification failed. A 401 clears the session and
    /// reports [`VerifyDisposition::SessionExpired`]; any other failure
    /// leaves the cached user untouched.
    pub fn apply_verify_failure(
        &mut self,
        store: &dyn SessionStore,
        err: &ApiError,
    ) -> VerifyDisposition {
        if is_unauthorized(err.status) {
            store.clear();
            self.user = None;
            self.phase = AuthPhase::Expired;
            VerifyDisposition::SessionExpired
        } else {
            VerifyDisposition::KeepCached
        }
    }

    /// Explicit logout: clear the stored session and forget the user.
    pub fn logout(&mut self, store: &dyn SessionStore) {
        store.clear();
        self.user = None;
        self.phase = AuthPhase::Anonymous;
    }

    /// True when a session (cached or verified) backs the current view.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, AuthPhase::Cached | AuthPhase::Verified)
    }
}
