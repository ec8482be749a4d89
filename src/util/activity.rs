//! Activity-based re-verification policy.
//!
//! DESIGN
//! ======
//! A localStorage timestamp records the last successful verification.
//! Navigation re-verifies only when the timestamp is missing or stale,
//! keeping routine page moves from hammering `/api/me`.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

/// localStorage key for the last-verification timestamp (ms since epoch).
pub const ACTIVITY_KEY: &str = "redrecon_last_activity";

/// Re-verify after this much inactivity.
pub const REFRESH_INTERVAL_MS: f64 = 30.0 * 60.0 * 1000.0;

/// True when a verification is due: no timestamp recorded, or the
/// interval has fully elapsed.
pub fn refresh_due(last_verified_ms: Option<f64>, now_ms: f64) -> bool {
    match last_verified_ms {
        None => true,
        Some(last) => now_ms - last >= REFRESH_INTERVAL_MS,
    }
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Last recorded verification time, if any.
pub fn last_activity() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        let raw = storage()?.get_item(ACTIVITY_KEY).ok().flatten()?;
        raw.parse::<f64>().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Record "verified now".
pub fn update_activity() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(ACTIVITY_KEY, &js_sys::Date::now().to_string());
        }
    }
}

/// Remove the marker. Called alongside session clearing.
pub fn clear_activity() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(ACTIVITY_KEY);
        }
    }
}

/// Evaluate the policy against the stored marker and the current clock.
pub fn refresh_due_now() -> bool {
    #[cfg(feature = "hydrate")]
    {
        refresh_due(last_activity(), js_sys::Date::now())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
