//! Browser localStorage helpers.
//!
//! Raw string read/write is the primitive; JSON variants layer serde on
//! top for structured records (locale preference). Everything is
//! best-effort: off-browser paths return `None` or no-op so SSR and
//! native tests stay deterministic.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read the raw string stored under `key`, if any.
pub fn read(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store `value` under `key`. Failures (quota, disabled storage) are
/// swallowed.
pub fn write(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Load and deserialize a JSON value from `key`. Corrupt payloads read
/// as `None`, the same as absent ones.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    serde_json::from_str(&read(key)?).ok()
}

/// Serialize and store a JSON value under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    if let Ok(raw) = serde_json::to_string(value) {
        write(key, &raw);
    }
}
