//! Public landing page.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="page page--landing">
            <Navbar/>
            <main class="landing">
                <h1 class="landing__title">"RedRecon"</h1>
                <p class="landing__tagline">
                    "A simulated cloud security-testing suite: infrastructure discovery, payload validation, audit trails, and a CVE browser in one dashboard."
                </p>
                <div class="landing__actions">
                    {move || {
                        if auth.get().is_authenticated() {
                            view! {
                                <a class="landing__cta" href="/dashboard">"Open dashboard"</a>
                            }
                                .into_any()
                        } else {
                            view! {
                                <a class="landing__cta" href="/login">"Sign in"</a>
                                <a class="landing__cta landing__cta--secondary" href="/register">
                                    "Create an account"
                                </a>
                            }
                                .into_any()
                        }
                    }}
                </div>
                <ul class="landing__features">
                    <li>"Map cloud endpoints and exposed services"</li>
                    <li>"Validate payloads against approved lab targets"</li>
                    <li>"Review every action in the audit trail"</li>
                </ul>
            </main>
            <Footer/>
        </div>
    }
}
