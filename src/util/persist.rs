//! Browser localStorage helpers for tool-result persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The scan and payload pages keep their last completed result across
//! reloads. These helpers centralize the hydrate-only read/write glue so
//! pages avoid repeating web-sys plumbing.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// localStorage key for the last completed discovery scan.
pub const LAST_SCAN_KEY: &str = "lastScanResult";
/// localStorage key for the last completed payload test.
pub const LAST_PAYLOAD_KEY: &str = "lastSecurityTestResult";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
