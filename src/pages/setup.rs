//! Lab setup guide page: fetches a markdown document and renders it.

#[cfg(test)]
#[path = "setup_test.rs"]
mod setup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;
use crate::util::auth::{install_session_guard, verify_if_due};

/// Render guide markdown to HTML.
fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    // Safety: drop inline/block raw HTML from the fetched document before
    // rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[component]
pub fn SetupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_session_guard(auth, use_navigate());
    verify_if_due(auth);

    let content = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_setup_guide().await {
                Ok(guide) => content.set(guide.content),
                Err(err) => error.set(err.to_string()),
            }
            loading.set(false);
        });
    });

    view! {
        <div class="page">
            <Navbar/>
            <div class="page__body">
                <Sidebar/>
                <main class="page__main setup">
                    <Show when=move || auth.get().is_authenticated()>
                        <header class="setup__header">
                            <h1>"Lab Setup"</h1>
                        </header>

                        <Show when=move || !error.get().is_empty()>
                            <p class="alert alert--error">{move || error.get()}</p>
                        </Show>

                        <Show
                            when=move || !loading.get()
                            fallback=|| view! { <p class="setup__loading">"Loading setup guide..."</p> }
                        >
                            {move || {
                                let rendered = render_markdown_html(&content.get());
                                view! { <div class="setup__guide" inner_html=rendered></div> }
                            }}
                        </Show>
                    </Show>
                </main>
            </div>
            <Footer/>
        </div>
    }
}
