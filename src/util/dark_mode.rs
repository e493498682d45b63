//! Dark mode resolution, application, and persistence.
//!
//! The active theme lives as a `data-theme` attribute on `<html>`; the
//! user's choice is stored in `localStorage` as a small JSON prefs document,
//! with the `prefers-color-scheme` media query deciding first visits.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures never surface: the toggle still works for the session,
//! and the native test build compiles the browser glue out entirely.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use serde::{Deserialize, Serialize};

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "onboard_prefs";

/// UI preferences persisted across sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct StoredPrefs {
    dark_mode: bool,
}

/// Resolve whether dark mode should start enabled.
///
/// A stored preference wins; otherwise the OS-level `prefers-color-scheme`
/// query decides.
pub fn read_preference() -> bool {
    if let Some(prefs) = load_prefs() {
        return prefs.dark_mode;
    }
    system_prefers_dark()
}

/// Stamp the resolved theme onto `<html>` as a `data-theme` attribute.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    save_prefs(StoredPrefs { dark_mode: next });
    next
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

fn load_prefs() -> Option<StoredPrefs> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

fn save_prefs(prefs: StoredPrefs) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(&prefs) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = prefs;
    }
}
