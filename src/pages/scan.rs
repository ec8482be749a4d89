//! Cloud infrastructure discovery page.

#[cfg(test)]
#[path = "scan_test.rs"]
mod scan_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::net::types::ScanResult;
use crate::state::auth::AuthState;
use crate::util::auth::{install_session_guard, verify_if_due};
use crate::util::persist;

fn validate_scan_target(target: &str) -> Result<String, &'static str> {
    let target = target.trim();
    if target.is_empty() {
        return Err("Please enter a target cloud endpoint or hostname");
    }
    Ok(target.to_owned())
}

fn port_state_class(state: &str) -> &'static str {
    match state {
        "open" => "badge badge--open",
        "closed" => "badge badge--closed",
        "filtered" => "badge badge--filtered",
        _ => "badge",
    }
}

fn open_service_count(result: &ScanResult) -> usize {
    result.ports.iter().filter(|port| port.state == "open").count()
}

#[component]
pub fn ScanPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_session_guard(auth, use_navigate());
    verify_if_due(auth);

    let target = RwSignal::new(String::new());
    let scanning = RwSignal::new(false);
    let result = RwSignal::new(None::<ScanResult>);
    let error = RwSignal::new(String::new());
    let validation_error = RwSignal::new(String::new());

    // Restore the previous result so a reload does not lose it.
    if let Some(saved) = persist::load_json::<ScanResult>(persist::LAST_SCAN_KEY) {
        result.set(Some(saved));
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if scanning.get() {
            return;
        }
        let target_value = match validate_scan_target(&target.get()) {
            Ok(value) => value,
            Err(message) => {
                validation_error.set(message.to_owned());
                error.set(String::new());
                return;
            }
        };
        validation_error.set(String::new());
        error.set(String::new());
        scanning.set(true);
        result.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::perform_scan(&target_value).await {
                Ok(scan) => {
                    persist::save_json(persist::LAST_SCAN_KEY, &scan);
                    result.set(Some(scan));
                }
                Err(err) => error.set(err.to_string()),
            }
            scanning.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target_value;
        }
    };

    view! {
        <div class="page">
            <Navbar/>
            <div class="page__body">
                <Sidebar/>
                <main class="page__main scan">
                    <Show when=move || auth.get().is_authenticated()>
                        <header class="scan__header">
                            <h1>"Cloud Infrastructure Discovery"</h1>
                            <p class="scan__blurb">
                                "Discover and map cloud resources, services, and configurations to identify exposed endpoints."
                            </p>
                        </header>

                        <form class="scan__form" on:submit=on_submit>
                            <input
                                class="scan__input"
                                type="text"
                                placeholder="api.example.com or cloud endpoint"
                                prop:value=move || target.get()
                                on:input=move |ev| {
                                    target.set(event_target_value(&ev));
                                    validation_error.set(String::new());
                                    error.set(String::new());
                                }
                            />
                            <button class="scan__button" type="submit" disabled=move || scanning.get()>
                                {move || if scanning.get() { "Discovering..." } else { "Start Discovery" }}
                            </button>
                        </form>

                        <Show when=move || !validation_error.get().is_empty()>
                            <p class="alert alert--warning">{move || validation_error.get()}</p>
                        </Show>
                        <Show when=move || !error.get().is_empty()>
                            <p class="alert alert--error">{move || error.get()}</p>
                        </Show>

                        {move || result.get().map(|scan| view! { <ScanReport scan=scan/> })}
                    </Show>
                </main>
            </div>
            <Footer/>
        </div>
    }
}

/// Rendered results for one completed discovery run.
#[component]
fn ScanReport(scan: ScanResult) -> impl IntoView {
    let open_services = open_service_count(&scan);
    let ports = scan.ports.clone();
    let services = scan.services.clone();
    let has_services = !services.is_empty();

    view! {
        <div class="scan__results">
            <section class="scan__summary">
                <h2>"Discovery Summary"</h2>
                <div class="scan__tiles">
                    <div class="scan__tile">
                        <span class="scan__tile-label">"Target"</span>
                        <span class="scan__tile-value">{scan.target.clone()}</span>
                    </div>
                    <div class="scan__tile">
                        <span class="scan__tile-label">"Host Status"</span>
                        <span class="scan__tile-value">{scan.host_status.clone()}</span>
                    </div>
                    <div class="scan__tile">
                        <span class="scan__tile-label">"Latency"</span>
                        <span class="scan__tile-value">{scan.latency.clone()}</span>
                    </div>
                    <div class="scan__tile">
                        <span class="scan__tile-label">"Open Services"</span>
                        <span class="scan__tile-value">{open_services}</span>
                    </div>
                </div>
            </section>

            <section class="scan__platform">
                <h2>"Platform Information"</h2>
                <p>
                    <span class="scan__platform-name">{scan.os_info.name.clone()}</span>
                    " "
                    <span class="scan__platform-version">{scan.os_info.version.clone()}</span>
                    <span class="scan__platform-accuracy">{scan.os_info.accuracy.clone()}</span>
                </p>
            </section>

            <section class="scan__ports">
                <h2>"Service Discovery Results"</h2>
                <table class="scan__table">
                    <thead>
                        <tr>
                            <th>"Port"</th>
                            <th>"State"</th>
                            <th>"Service"</th>
                            <th>"Version"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {ports
                            .into_iter()
                            .map(|port| {
                                let state_class = port_state_class(&port.state);
                                let version = if port.version.is_empty() {
                                    "Unknown".to_owned()
                                } else {
                                    port.version
                                };
                                view! {
                                    <tr>
                                        <td>{port.port}</td>
                                        <td>
                                            <span class=state_class>{port.state}</span>
                                        </td>
                                        <td>{port.service}</td>
                                        <td>{version}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </section>

            <Show when=move || has_services>
                <section class="scan__services">
                    <h2>"Detected Cloud Services"</h2>
                    {services
                        .clone()
                        .into_iter()
                        .map(|service| {
                            view! {
                                <div class="scan__service">
                                    <span class="scan__service-name">
                                        {format!("{} (Port {})", service.service, service.port)}
                                    </span>
                                    <span class="scan__service-product">{service.product}</span>
                                    <span class="scan__service-extra">{service.extrainfo}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </section>
            </Show>
        </div>
    }
}
