//! Registration page: account creation with local validation.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Minimum accepted password length, matching the backend constraint.
const MIN_PASSWORD_LEN: usize = 6;

fn validate_registration(
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email address.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters long");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let navigate = StoredValue::new(use_navigate());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_registration(&email.get(), &password.get(), &confirm.get()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&email_value, &password_value).await {
                    Ok(_) => {
                        success.set(true);
                        // Let the confirmation show before moving on.
                        gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        // Backend detail verbatim, e.g. "Email already registered".
                        error.set(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <Show
                when=move || !success.get()
                fallback=|| {
                    view! {
                        <div class="auth-card auth-card--success">
                            <h1 class="auth-card__title">"Registration Successful!"</h1>
                            <p class="auth-card__subtitle">"Redirecting to login..."</p>
                        </div>
                    }
                }
            >
                <div class="auth-card">
                    <h1 class="auth-card__title">"Create your account"</h1>

                    <Show when=move || !error.get().is_empty()>
                        <div class="auth-error">
                            <h3 class="auth-error__heading">"Registration Error"</h3>
                            <p class="auth-error__message">{move || error.get()}</p>
                        </div>
                    </Show>

                    <form class="auth-form" on:submit=on_submit>
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Choose a password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Confirm your password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating account..." } else { "Register" }}
                        </button>
                    </form>

                    <p class="auth-card__switch">
                        "Already registered? "
                        <a href="/login">"Sign in"</a>
                    </p>
                </div>
            </Show>
        </div>
    }
}
