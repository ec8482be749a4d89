//! CVE browser page.

#[cfg(test)]
#[path = "cves_test.rs"]
mod cves_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::net::types::Cve;
use crate::state::auth::AuthState;
use crate::util::auth::{install_session_guard, verify_if_due};

#[cfg(feature = "hydrate")]
const PAGE_LIMIT: u32 = 20;

fn severity_class(severity: &str) -> &'static str {
    match severity.to_ascii_lowercase().as_str() {
        "critical" => "badge badge--critical",
        "high" => "badge badge--high",
        "medium" => "badge badge--medium",
        "low" => "badge badge--low",
        _ => "badge",
    }
}

/// Severity choices; `None` asks the backend for every severity.
#[cfg(any(test, feature = "hydrate"))]
fn severity_param(filter: &str) -> Option<&str> {
    match filter {
        "all" => None,
        severity => Some(severity),
    }
}

/// Tag filtering happens client-side; the empty tag means "no filter".
fn matches_tag(cve: &Cve, tag: &str) -> bool {
    tag.is_empty() || cve.tags.iter().any(|candidate| candidate == tag)
}

#[component]
pub fn CvesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_session_guard(auth, use_navigate());
    verify_if_due(auth);

    let cves = RwSignal::new(Vec::<Cve>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let severity_filter = RwSignal::new("all".to_owned());
    let search = RwSignal::new(String::new());
    let selected_tag = RwSignal::new(String::new());

    // Refetch whenever the severity filter changes.
    Effect::new(move || {
        let filter_value = severity_filter.get();
        loading.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let severity = severity_param(&filter_value).map(ToOwned::to_owned);
            match crate::net::api::fetch_cves(severity.as_deref(), None, PAGE_LIMIT).await {
                Ok(records) => cves.set(records),
                Err(err) => error.set(err.to_string()),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = filter_value;
        }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = search.get().trim().to_owned();
        if term.is_empty() {
            // Blank search falls back to the filtered listing.
            severity_filter.set(severity_filter.get());
            return;
        }
        loading.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::search_cves(&term, PAGE_LIMIT).await {
                Ok(records) => cves.set(records),
                Err(err) => error.set(err.to_string()),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = term;
        }
    };

    let visible = move || {
        let tag = selected_tag.get();
        cves.get()
            .into_iter()
            .filter(|cve| matches_tag(cve, &tag))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <Navbar/>
            <div class="page__body">
                <Sidebar/>
                <main class="page__main cves">
                    <Show when=move || auth.get().is_authenticated()>
                        <header class="cves__header">
                            <h1>"CVE Database"</h1>
                        </header>

                        <div class="cves__controls">
                            <select
                                class="cves__filter"
                                on:change=move |ev| severity_filter.set(event_target_value(&ev))
                            >
                                <option value="all" selected=move || severity_filter.get() == "all">
                                    "All severities"
                                </option>
                                <option
                                    value="critical"
                                    selected=move || severity_filter.get() == "critical"
                                >
                                    "Critical"
                                </option>
                                <option value="high" selected=move || severity_filter.get() == "high">
                                    "High"
                                </option>
                                <option
                                    value="medium"
                                    selected=move || severity_filter.get() == "medium"
                                >
                                    "Medium"
                                </option>
                                <option value="low" selected=move || severity_filter.get() == "low">
                                    "Low"
                                </option>
                            </select>
                            <form class="cves__search-form" on:submit=on_search>
                                <input
                                    class="cves__search"
                                    type="text"
                                    placeholder="Search description or tag"
                                    prop:value=move || search.get()
                                    on:input=move |ev| search.set(event_target_value(&ev))
                                />
                                <button class="cves__search-button" type="submit">"Search"</button>
                            </form>
                            <Show when=move || !selected_tag.get().is_empty()>
                                <button
                                    class="cves__tag-clear"
                                    on:click=move |_| selected_tag.set(String::new())
                                >
                                    {move || format!("Clear tag: {}", selected_tag.get())}
                                </button>
                            </Show>
                        </div>

                        <Show when=move || !error.get().is_empty()>
                            <p class="alert alert--error">{move || error.get()}</p>
                        </Show>

                        <Show
                            when=move || !loading.get()
                            fallback=|| view! { <p class="cves__loading">"Loading CVEs..."</p> }
                        >
                            {move || {
                                let records = visible();
                                if records.is_empty() {
                                    view! { <p class="cves__empty">"No CVEs match."</p> }.into_any()
                                } else {
                                    records
                                        .into_iter()
                                        .map(|cve| {
                                            view! { <CveCard cve=cve selected_tag=selected_tag/> }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                            }}
                        </Show>
                    </Show>
                </main>
            </div>
            <Footer/>
        </div>
    }
}

/// One vulnerability record with clickable tag chips.
#[component]
fn CveCard(cve: Cve, selected_tag: RwSignal<String>) -> impl IntoView {
    let badge = severity_class(&cve.severity);
    let reference = cve.reference.clone();
    let has_reference = !reference.is_empty();

    view! {
        <article class="cves__entry">
            <div class="cves__entry-head">
                <span class="cves__id">{cve.id.clone()}</span>
                <span class=badge>{cve.severity.clone()}</span>
                <span class="cves__date">{cve.published_date.clone()}</span>
            </div>
            <p class="cves__description">{cve.description.clone()}</p>
            <div class="cves__tags">
                {cve.tags
                    .iter()
                    .map(|tag| {
                        let tag = tag.clone();
                        let pick = tag.clone();
                        view! {
                            <button
                                class="cves__tag"
                                on:click=move |_| selected_tag.set(pick.clone())
                            >
                                {tag}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Show when=move || has_reference>
                <a
                    class="cves__reference"
                    href=reference.clone()
                    target="_blank"
                    rel="noreferrer"
                >
                    "Reference"
                </a>
            </Show>
        </article>
    }
}
