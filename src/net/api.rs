//! REST adapter for the backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call funnels through one request path that attaches the bearer
//! token and maps failures to [`ApiError`]. An HTTP 401 with a stored
//! session fires the session-expired hook so the app can tear down state
//! and redirect; a network failure (no status at all) never does.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    AuthResponse, Cve, LogEntry, PayloadResult, RegisterResponse, ScanResult, SetupGuide, User,
};

/// Structured error for any backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status, when the failure came from an HTTP response.
    pub status: Option<u16>,
    /// Human-readable message; the backend `detail` field when present.
    pub message: String,
}

impl ApiError {
    /// Failure with no HTTP status (network error, codec error, SSR stub).
    fn network(message: &str) -> Self {
        Self {
            status: None,
            message: message.to_owned(),
        }
    }
}

/// True when a status represents an authoritative session rejection.
pub fn is_unauthorized(status: Option<u16>) -> bool {
    status == Some(401)
}

#[cfg(feature = "hydrate")]
const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[cfg(any(test, feature = "hydrate"))]
fn api_url_with_base(base: &str, path: &str) -> String {
    format!("{base}/api{path}")
}

/// Absolute URL for an API path like `/login`. The base is overridable at
/// build time via `REDRECON_API_URL`.
#[cfg(feature = "hydrate")]
fn api_url(path: &str) -> String {
    api_url_with_base(option_env!("REDRECON_API_URL").unwrap_or(DEFAULT_API_BASE), path)
}

#[cfg(any(test, feature = "hydrate"))]
fn log_endpoint(log_id: &str) -> String {
    format!("/logs/{log_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn cve_search_endpoint(term: &str) -> String {
    format!("/cves/search/{term}")
}

/// Extract the backend `detail` message from an error body, falling back
/// to the operation's generic message.
#[cfg(any(test, feature = "hydrate"))]
fn error_detail(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(serde_json::Value::as_str)
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| fallback.to_owned())
}

/// Query pairs for `GET /logs`.
#[cfg(any(test, feature = "hydrate"))]
fn logs_query(tool: Option<&str>, limit: u32, offset: u32) -> Vec<(String, String)> {
    let mut query = vec![
        ("limit".to_owned(), limit.to_string()),
        ("offset".to_owned(), offset.to_string()),
    ];
    if let Some(tool) = tool {
        query.push(("tool".to_owned(), tool.to_owned()));
    }
    query
}

/// Query pairs for `GET /cves`.
#[cfg(any(test, feature = "hydrate"))]
fn cves_query(severity: Option<&str>, tag: Option<&str>, limit: u32) -> Vec<(String, String)> {
    let mut query = vec![("limit".to_owned(), limit.to_string())];
    if let Some(severity) = severity {
        query.push(("severity".to_owned(), severity.to_owned()));
    }
    if let Some(tag) = tag {
        query.push(("tag".to_owned(), tag.to_owned()));
    }
    query
}

#[cfg(feature = "hydrate")]
thread_local! {
    static SESSION_EXPIRED_HOOK: std::cell::RefCell<Option<Box<dyn Fn()>>> =
        const { std::cell::RefCell::new(None) };
}

/// Register the callback fired when the backend authoritatively rejects
/// the stored session. Transport stays navigation-free; the app decides
/// what expiry means.
#[cfg(feature = "hydrate")]
pub fn set_session_expired_hook(hook: impl Fn() + 'static) {
    SESSION_EXPIRED_HOOK.with(|cell| *cell.borrow_mut() = Some(Box::new(hook)));
}

#[cfg(feature = "hydrate")]
fn notify_session_expired() {
    SESSION_EXPIRED_HOOK.with(|cell| {
        if let Some(hook) = cell.borrow().as_ref() {
            hook();
        }
    });
}

/// Single request path: builds the URL, attaches the bearer token, sends,
/// and maps the outcome. The expiry hook only fires for a 401 while a
/// session is actually stored, so a bad-credentials login stays a plain
/// error.
#[cfg(feature = "hydrate")]
async fn send<T: serde::de::DeserializeOwned>(
    method: gloo_net::http::Method,
    path: &str,
    query: &[(String, String)],
    body: Option<&serde_json::Value>,
    fallback: &str,
) -> Result<T, ApiError> {
    use gloo_net::http::RequestBuilder;

    let url = api_url(path);
    let mut builder = RequestBuilder::new(&url).method(method);
    if !query.is_empty() {
        builder = builder.query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    if let Some(token) = crate::util::session::stored_token() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder.json(body),
        None => builder.build(),
    }
    .map_err(|_| ApiError::network(fallback))?;

    let response = request.send().await.map_err(|_| ApiError::network(fallback))?;

    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|_| ApiError::network(fallback));
    }

    let status = response.status();
    let body_text = response.text().await.unwrap_or_default();
    if is_unauthorized(Some(status)) && crate::util::session::has_session() {
        notify_session_expired();
    }
    Err(ApiError {
        status: Some(status),
        message: error_detail(&body_text, fallback),
    })
}

/// Create an account via `POST /api/register`.
///
/// # Errors
///
/// Returns the backend `detail` message (e.g. "Email already registered")
/// or a generic failure.
pub async fn register(email: &str, password: &str) -> Result<RegisterResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        send(
            gloo_net::http::Method::POST,
            "/register",
            &[],
            Some(&body),
            "Registration failed",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::network("not available on server"))
    }
}

/// Log in via `POST /api/login`; returns the token and user snapshot.
///
/// # Errors
///
/// Returns the backend `detail` message (e.g. "Invalid email or
/// password") or a generic failure. A 401 here does not fire the expiry
/// hook because no session is stored yet.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        send(
            gloo_net::http::Method::POST,
            "/login",
            &[],
            Some(&body),
            "Login failed",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::network("not available on server"))
    }
}

/// Re-verify the stored session via `GET /api/me`.
///
/// # Errors
///
/// A 401 means the session was authoritatively rejected; anything else is
/// transient and callers should keep their cached user.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(
            gloo_net::http::Method::GET,
            "/me",
            &[],
            None,
            "Session verification failed",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::network("not available on server"))
    }
}

/// Run a discovery scan via `POST /api/scan`.
///
/// # Errors
///
/// Returns the backend `detail` message or a generic failure.
pub async fn perform_scan(target: &str) -> Result<ScanResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "target": target });
        send(
            gloo_net::http::Method::POST,
            "/scan",
            &[],
            Some(&body),
            "Discovery failed. Please try again.",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target;
        Err(ApiError::network("not available on server"))
    }
}

/// Run a payload test via `POST /api/payload`.
///
/// # Errors
///
/// Returns the backend `detail` message or a generic failure.
pub async fn test_payload(
    payload_type: &str,
    target_url: &str,
    payload: &str,
) -> Result<PayloadResult, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({
            "payload_type": payload_type,
            "target_url": target_url,
            "payload": payload,
        });
        send(
            gloo_net::http::Method::POST,
            "/payload",
            &[],
            Some(&body),
            "Security validation failed. Please try again.",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (payload_type, target_url, payload);
        Err(ApiError::network("not available on server"))
    }
}

/// Fetch activity logs via `GET /api/logs`.
///
/// # Errors
///
/// Returns the backend `detail` message or a generic failure.
pub async fn fetch_logs(
    tool: Option<&str>,
    limit: u32,
    offset: u32,
) -> Result<Vec<LogEntry>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(
            gloo_net::http::Method::GET,
            "/logs",
            &logs_query(tool, limit, offset),
            None,
            "Failed to fetch logs",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (tool, limit, offset);
        Err(ApiError::network("not available on server"))
    }
}

/// Delete one activity-log entry via `DELETE /api/logs/{id}`.
///
/// # Errors
///
/// Returns the backend `detail` message or a generic failure.
pub async fn delete_log(log_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let _: serde_json::Value = send(
            gloo_net::http::Method::DELETE,
            &log_endpoint(log_id),
            &[],
            None,
            "Failed to delete audit entry",
        )
        .await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = log_id;
        Err(ApiError::network("not available on server"))
    }
}

/// Fetch the CVE list via `GET /api/cves`.
///
/// # Errors
///
/// Returns the backend `detail` message or a generic failure.
pub async fn fetch_cves(
    severity: Option<&str>,
    tag: Option<&str>,
    limit: u32,
) -> Result<Vec<Cve>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(
            gloo_net::http::Method::GET,
            "/cves",
            &cves_query(severity, tag, limit),
            None,
            "Failed to fetch CVEs",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (severity, tag, limit);
        Err(ApiError::network("not available on server"))
    }
}

/// Search CVEs by term via `GET /api/cves/search/{term}`.
///
/// # Errors
///
/// Returns the backend `detail` message or a generic failure.
pub async fn search_cves(term: &str, limit: u32) -> Result<Vec<Cve>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(
            gloo_net::http::Method::GET,
            &cve_search_endpoint(term),
            &[("limit".to_owned(), limit.to_string())],
            None,
            "Search failed",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (term, limit);
        Err(ApiError::network("not available on server"))
    }
}

/// Fetch the lab setup guide via `GET /api/setup`.
///
/// # Errors
///
/// Returns the backend `detail` message or a generic failure.
pub async fn fetch_setup_guide() -> Result<SetupGuide, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(
            gloo_net::http::Method::GET,
            "/setup",
            &[],
            None,
            "Failed to fetch setup guide",
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::network("not available on server"))
    }
}
