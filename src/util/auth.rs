//! Shared auth guard helpers for route components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same behavior: redirect when no
//! usable session exists, render immediately from the cached session
//! otherwise, and reconcile with the backend in the background. Only a
//! 401 is grounds for logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthPhase, AuthState};

/// Redirect to `/login` whenever no usable session backs the view.
pub fn install_session_guard<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if matches!(state.phase, AuthPhase::Anonymous | AuthPhase::Expired) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Fire a background verification when the activity policy says one is
/// due. Never blocks rendering of the cached user.
pub fn verify_if_due(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        if auth.get_untracked().phase != AuthPhase::Cached {
            return;
        }
        if !crate::util::activity::refresh_due_now() {
            return;
        }
        spawn_verify(auth);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Verify the session against `/api/me` in the background, applying the
/// state-machine transitions when the call resolves. Overlapping calls
/// are tolerated; every transition is idempotent.
pub fn spawn_verify(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::auth::VerifyDisposition;
        use crate::util::session::CookieSessionStore;

        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_current_user().await {
                Ok(user) => {
                    auth.update(|state| state.apply_verify_success(&CookieSessionStore, user));
                    if auth.get_untracked().phase == AuthPhase::Verified {
                        crate::util::activity::update_activity();
                    }
                }
                Err(err) => {
                    log::warn!("session verification failed: {err}");
                    let disposition = auth
                        .try_update(|state| state.apply_verify_failure(&CookieSessionStore, &err));
                    if disposition == Some(VerifyDisposition::SessionExpired) {
                        force_login_redirect();
                    }
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Full-page navigation to the login entry point.
pub fn force_login_redirect() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
