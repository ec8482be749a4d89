//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    cves::CvesPage, dashboard::DashboardPage, home::HomePage, login::LoginPage, logs::LogsPage,
    payload::PayloadPage, register::RegisterPage, scan::ScanPage, setup::SetupPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Bootstraps auth state synchronously from the cookie store so guarded
/// routes paint the cached user on first render, wires the transport's
/// session-expired hook to teardown + redirect, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    let auth = RwSignal::new(AuthState::bootstrap(&crate::util::session::CookieSessionStore));
    #[cfg(not(feature = "hydrate"))]
    let auth = RwSignal::new(AuthState::default());

    provide_context(auth);

    // The HTTP layer only signals expiry; what it means (clear + leave)
    // is decided here.
    #[cfg(feature = "hydrate")]
    crate::net::api::set_session_expired_hook(|| {
        use crate::util::session::{CookieSessionStore, SessionStore as _};
        CookieSessionStore.clear();
        crate::util::auth::force_login_redirect();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/redrecon.css"/>
        <Title text="RedRecon"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("scan") view=ScanPage/>
                <Route path=StaticSegment("payload") view=PayloadPage/>
                <Route path=StaticSegment("logs") view=LogsPage/>
                <Route path=StaticSegment("cves") view=CvesPage/>
                <Route path=StaticSegment("setup") view=SetupPage/>
            </Routes>
        </Router>
    }
}
