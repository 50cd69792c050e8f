//! Dark mode initialization and toggle.
//!
//! Reads the visitor's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element; the toggle writes
//! back and updates that attribute. SSR paths no-op so server rendering
//! stays deterministic.

use crate::util::storage;

const STORAGE_KEY: &str = "portfolio_theme";

/// Read the dark mode preference: stored value first, then the system
/// `prefers-color-scheme` query, then light.
pub fn read_preference() -> bool {
    if let Some(stored) = storage::read(STORAGE_KEY) {
        return stored == "dark";
    }

    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::write(STORAGE_KEY, if next { "dark" } else { "light" });
    next
}
