//! Side navigation listing the tool routes.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// One sidebar destination.
pub struct NavEntry {
    pub name: &'static str,
    pub href: &'static str,
}

/// Tool navigation, in display order.
pub const NAVIGATION: [NavEntry; 6] = [
    NavEntry { name: "Dashboard", href: "/dashboard" },
    NavEntry { name: "Network Scan", href: "/scan" },
    NavEntry { name: "Payload Testing", href: "/payload" },
    NavEntry { name: "Activity Logs", href: "/logs" },
    NavEntry { name: "CVE Database", href: "/cves" },
    NavEntry { name: "Lab Setup", href: "/setup" },
];

fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
}

/// Fixed sidebar with the tool routes; the current route is highlighted.
#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <aside class="sidebar">
            <nav class="sidebar__nav">
                {NAVIGATION
                    .iter()
                    .map(|entry| {
                        let href = entry.href;
                        view! {
                            <a
                                class="sidebar__link"
                                class:sidebar__link--active=move || {
                                    is_active(&location.pathname.get(), href)
                                }
                                href=href
                            >
                                {entry.name}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <div class="sidebar__footer">
                <p class="sidebar__version">"RedRecon v1.0.0"</p>
                <p class="sidebar__tagline">"Red Team Simulation"</p>
            </div>
        </aside>
    }
}
