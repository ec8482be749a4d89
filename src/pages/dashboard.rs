//! Dashboard page: the authenticated landing route with the tool grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders immediately from the cached session, then always re-verifies
//! against the backend (this is the route users land on after login and
//! after long absences).

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::components::tool_card::ToolCard;
use crate::state::auth::AuthState;
use crate::util::auth::{install_session_guard, spawn_verify};

/// One entry in the dashboard tool grid.
pub struct Tool {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub accent: &'static str,
}

/// The tool catalog, in display order.
pub const TOOLS: [Tool; 5] = [
    Tool {
        title: "Network Scan",
        description: "Perform comprehensive network reconnaissance and port scanning",
        href: "/scan",
        accent: "red",
    },
    Tool {
        title: "Payload Testing",
        description: "Test attack payloads against approved lab endpoints",
        href: "/payload",
        accent: "blue",
    },
    Tool {
        title: "Activity Logs",
        description: "View and manage your testing activity logs",
        href: "/logs",
        accent: "green",
    },
    Tool {
        title: "CVE Database",
        description: "Browse vulnerability records and references",
        href: "/cves",
        accent: "purple",
    },
    Tool {
        title: "Lab Setup",
        description: "Guidance for setting up your testing lab",
        href: "/setup",
        accent: "yellow",
    },
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_session_guard(auth, use_navigate());

    // The dashboard always reconfirms the session; other pages go through
    // the activity policy.
    spawn_verify(auth);

    let welcome = move || {
        auth.get()
            .user
            .map(|user| format!("Welcome back, {}", user.email))
            .unwrap_or_default()
    };

    view! {
        <div class="page">
            <Navbar/>
            <div class="page__body">
                <Sidebar/>
                <main class="page__main dashboard">
                    // No protected content until a session backs the view.
                    <Show when=move || auth.get().is_authenticated()>
                        <header class="dashboard__header">
                            <h1>"Dashboard"</h1>
                            <p class="dashboard__welcome">{welcome}</p>
                        </header>
                        <div class="dashboard__grid">
                            {TOOLS
                                .iter()
                                .map(|tool| {
                                    view! {
                                        <ToolCard
                                            title=tool.title
                                            description=tool.description
                                            href=tool.href
                                            accent=tool.accent
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </Show>
                </main>
            </div>
            <Footer/>
        </div>
    }
}
