//! Dashboard grid card linking to one tool.

use leptos::prelude::*;

/// A clickable card for the dashboard tool grid.
#[component]
pub fn ToolCard(
    title: &'static str,
    description: &'static str,
    href: &'static str,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <a class=format!("tool-card tool-card--{accent}") href=href>
            <span class="tool-card__title">{title}</span>
            <span class="tool-card__description">{description}</span>
        </a>
    }
}
