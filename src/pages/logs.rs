//! Activity-log (audit trail) page.

#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::net::types::LogEntry;
use crate::state::auth::AuthState;
use crate::util::auth::{install_session_guard, verify_if_due};

#[cfg(feature = "hydrate")]
const PAGE_LIMIT: u32 = 50;

/// Client-side substring search over the fields users actually scan for.
fn matches_search(entry: &LogEntry, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    entry.input_data.to_lowercase().contains(&term) || entry.tool.to_lowercase().contains(&term)
}

fn tool_badge_class(tool: &str) -> &'static str {
    match tool {
        "scan" => "badge badge--scan",
        "payload" => "badge badge--payload",
        _ => "badge",
    }
}

/// Tool filter choices; `None` asks the backend for everything.
#[cfg(any(test, feature = "hydrate"))]
fn tool_filter_param(filter: &str) -> Option<&str> {
    match filter {
        "all" => None,
        tool => Some(tool),
    }
}

#[component]
pub fn LogsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_session_guard(auth, use_navigate());
    verify_if_due(auth);

    let logs = RwSignal::new(Vec::<LogEntry>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let filter = RwSignal::new("all".to_owned());
    let search = RwSignal::new(String::new());
    let expanded = RwSignal::new(None::<String>);

    // Refetch whenever the tool filter changes.
    Effect::new(move || {
        let filter_value = filter.get();
        loading.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let tool = tool_filter_param(&filter_value).map(ToOwned::to_owned);
            match crate::net::api::fetch_logs(tool.as_deref(), PAGE_LIMIT, 0).await {
                Ok(entries) => logs.set(entries),
                Err(err) => error.set(err.to_string()),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = filter_value;
        }
    });

    let on_delete = Callback::new(move |log_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message("Are you sure you want to delete this audit entry?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_log(&log_id).await {
                    Ok(()) => logs.update(|entries| entries.retain(|entry| entry.id != log_id)),
                    Err(err) => error.set(err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = log_id;
        }
    });

    let visible = move || {
        let term = search.get();
        logs.get()
            .into_iter()
            .filter(|entry| matches_search(entry, &term))
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <Navbar/>
            <div class="page__body">
                <Sidebar/>
                <main class="page__main logs">
                    <Show when=move || auth.get().is_authenticated()>
                        <header class="logs__header">
                            <h1>"Cloud Audit Trail"</h1>
                        </header>

                        <div class="logs__controls">
                            <select
                                class="logs__filter"
                                on:change=move |ev| filter.set(event_target_value(&ev))
                            >
                                <option value="all" selected=move || filter.get() == "all">
                                    "All tools"
                                </option>
                                <option value="scan" selected=move || filter.get() == "scan">
                                    "Scans"
                                </option>
                                <option value="payload" selected=move || filter.get() == "payload">
                                    "Payload tests"
                                </option>
                            </select>
                            <input
                                class="logs__search"
                                type="text"
                                placeholder="Search entries"
                                prop:value=move || search.get()
                                on:input=move |ev| search.set(event_target_value(&ev))
                            />
                        </div>

                        <Show when=move || !error.get().is_empty()>
                            <p class="alert alert--error">{move || error.get()}</p>
                        </Show>

                        <Show
                            when=move || !loading.get()
                            fallback=|| view! { <p class="logs__loading">"Loading audit trail..."</p> }
                        >
                            {move || {
                                let entries = visible();
                                if entries.is_empty() {
                                    view! { <p class="logs__empty">"No audit entries."</p> }.into_any()
                                } else {
                                    entries
                                        .into_iter()
                                        .map(|entry| {
                                            view! { <LogRow entry=entry expanded=expanded on_delete=on_delete/> }
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

/// One audit entry with an expandable result payload.
#[component]
fn LogRow(
    entry: LogEntry,
    expanded: RwSignal<Option<String>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let id = entry.id.clone();
    let toggle_id = id.clone();
    let delete_id = id.clone();
    let badge = tool_badge_class(&entry.tool);
    let is_expanded = move || expanded.get().as_deref() == Some(id.as_str());
    let detail = serde_json::to_string_pretty(&entry.result).unwrap_or_default();

    view! {
        <article class="logs__entry">
            <div class="logs__entry-row">
                <span class=badge>{entry.tool.clone()}</span>
                <span class="logs__input">{entry.input_data.clone()}</span>
                <span class="logs__time">{entry.timestamp.clone()}</span>
                <button
                    class="logs__toggle"
                    on:click=move |_| {
                        expanded.update(|current| {
                            if current.as_deref() == Some(toggle_id.as_str()) {
                                *current = None;
                            } else {
                                *current = Some(toggle_id.clone());
                            }
                        });
                    }
                >
                    "Details"
                </button>
                <button class="logs__delete" on:click=move |_| on_delete.run(delete_id.clone())>
                    "Delete"
                </button>
            </div>
            <Show when=is_expanded>
                <pre class="logs__detail">{detail.clone()}</pre>
            </Show>
        </article>
    }
}
