//! Cookie-backed session storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! A session is the pairing of the auth token and the user it identifies.
//! Both halves live in cookies written and cleared together; a token
//! without a parsable user is treated as no session at all, so partial
//! writes never look authenticated.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "token";
/// Cookie holding the user snapshot as JSON.
pub const USER_COOKIE: &str = "user";
/// Default session lifetime, matching the backend token expiry window.
pub const SESSION_TTL_DAYS: u32 = 7;

#[cfg(any(test, feature = "hydrate"))]
const SECS_PER_DAY: u64 = 86_400;

/// A stored session. Expiry rides on the cookie `Max-Age`; the browser
/// does not let us read it back, so it is not a field here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Durable session storage with atomic whole-record writes.
///
/// Injectable so the auth state machine can be exercised against an
/// in-memory double.
pub trait SessionStore {
    /// Persist both halves of the session with the same lifetime.
    /// Degrades silently when storage is unavailable.
    fn save(&self, token: &str, user: &User, ttl_days: u32);

    /// The stored session, or `None` when either half is missing or the
    /// user payload does not parse.
    fn read(&self) -> Option<Session>;

    /// Remove the session and any auxiliary markers. Idempotent.
    fn clear(&self);

    /// True iff both token and user are present and usable.
    fn has_session(&self) -> bool {
        self.read().is_some()
    }
}

/// Assemble a session from raw cookie values. Corrupt user JSON is "no
/// session", never an error.
fn session_from_parts(token: Option<String>, user_json: Option<String>) -> Option<Session> {
    let token = token.filter(|t| !t.is_empty())?;
    let raw = user_json.filter(|u| !u.is_empty())?;
    let user = serde_json::from_str::<User>(&raw).ok()?;
    Some(Session { token, user })
}

#[cfg(any(test, feature = "hydrate"))]
fn set_cookie_string(name: &str, value: &str, max_age_secs: u64) -> String {
    format!("{name}={value}; Max-Age={max_age_secs}; Path=/; Secure; SameSite=Strict")
}

#[cfg(any(test, feature = "hydrate"))]
fn clear_cookie_string(name: &str) -> String {
    format!("{name}=; Max-Age=0; Path=/; Secure; SameSite=Strict")
}

/// Value of `name` within a `document.cookie` string.
#[cfg(any(test, feature = "hydrate"))]
fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_owned())
    })
}

/// Browser cookie store. Every method degrades silently when the
/// document is unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieSessionStore;

#[cfg(feature = "hydrate")]
impl CookieSessionStore {
    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast as _;
        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }

    fn raw_cookies() -> Option<String> {
        Self::document()?.cookie().ok()
    }

    fn write(assignment: &str) {
        if let Some(document) = Self::document() {
            let _ = document.set_cookie(assignment);
        }
    }
}

impl SessionStore for CookieSessionStore {
    fn save(&self, token: &str, user: &User, ttl_days: u32) {
        #[cfg(feature = "hydrate")]
        {
            let Ok(user_json) = serde_json::to_string(user) else {
                return;
            };
            let max_age = u64::from(ttl_days) * SECS_PER_DAY;
            let token_value = String::from(js_sys::encode_uri_component(token));
            let user_value = String::from(js_sys::encode_uri_component(&user_json));
            Self::write(&set_cookie_string(TOKEN_COOKIE, &token_value, max_age));
            Self::write(&set_cookie_string(USER_COOKIE, &user_value, max_age));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, user, ttl_days);
        }
    }

    fn read(&self) -> Option<Session> {
        #[cfg(feature = "hydrate")]
        {
            let cookies = Self::raw_cookies()?;
            let decode =
                |raw: String| js_sys::decode_uri_component(&raw).ok().map(String::from);
            let token = cookie_value(&cookies, TOKEN_COOKIE).and_then(decode);
            let user_json = cookie_value(&cookies, USER_COOKIE).and_then(decode);
            session_from_parts(token, user_json)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            Self::write(&clear_cookie_string(TOKEN_COOKIE));
            Self::write(&clear_cookie_string(USER_COOKIE));
            crate::util::activity::clear_activity();
        }
    }
}

/// Token from the browser store, if a full session is present.
pub fn stored_token() -> Option<String> {
    CookieSessionStore.read().map(|session| session.token)
}

/// True when the browser store holds a full session.
pub fn has_session() -> bool {
    CookieSessionStore.has_session()
}

/// In-memory store mirroring the cookie pair. The test double the
/// injectable trait exists for; raw values are stored so corrupt
/// payloads can be injected.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: std::cell::RefCell<Option<String>>,
    user_json: std::cell::RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject a raw token value, bypassing `save`.
    pub fn set_raw_token(&self, raw: &str) {
        *self.token.borrow_mut() = Some(raw.to_owned());
    }

    /// Inject a raw user payload, bypassing serialization.
    pub fn set_raw_user(&self, raw: &str) {
        *self.user_json.borrow_mut() = Some(raw.to_owned());
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, token: &str, user: &User, _ttl_days: u32) {
        let Ok(user_json) = serde_json::to_string(user) else {
            return;
        };
        *self.token.borrow_mut() = Some(token.to_owned());
        *self.user_json.borrow_mut() = Some(user_json);
    }

    fn read(&self) -> Option<Session> {
        session_from_parts(self.token.borrow().clone(), self.user_json.borrow().clone())
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
        self.user_json.borrow_mut().take();
    }
}
