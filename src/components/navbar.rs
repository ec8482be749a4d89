//! Top navigation bar with brand, identity, and logout.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::session::CookieSessionStore;

/// Top bar — brand link, the signed-in email, and auth actions.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        auth.update(|state| state.logout(&CookieSessionStore));
        crate::util::auth::force_login_redirect();
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                <span class="navbar__logo">"RedRecon"</span>
            </a>
            <div class="navbar__actions">
                {move || {
                    let state = auth.get();
                    if state.is_authenticated() {
                        let email = state
                            .user
                            .as_ref()
                            .map(|user| user.email.clone())
                            .unwrap_or_default();
                        view! {
                            <a class="navbar__link" href="/dashboard">"Dashboard"</a>
                            <span class="navbar__email">{email}</span>
                            <button class="navbar__logout" on:click=on_logout>
                                "Logout"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <a class="navbar__link" href="/login">"Login"</a>
                            <a class="navbar__link navbar__link--primary" href="/register">
                                "Register"
                            </a>
                        }
                            .into_any()
                    }
                }}
            </div>
        </nav>
    }
}
