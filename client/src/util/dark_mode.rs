//! Theme initialization and toggle.
//!
//! Reads the preference from `localStorage["theme"]`, falling back to the OS
//! `prefers-color-scheme` query, and mirrors it as `data-theme="dark"` on
//! `<body>` (light removes the attribute). Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op so server rendering stays deterministic (always light).

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::ui::Theme;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Read the startup theme.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());

        Theme::resolve(stored.as_deref(), prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Mirror `theme` onto the `<body>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let _ = match theme {
            Theme::Dark => body.set_attribute("data-theme", "dark"),
            Theme::Light => body.remove_attribute("data-theme"),
        };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new value.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(STORAGE_KEY, next.as_str()).is_err() {
                leptos::logging::warn!("theme preference not persisted");
            }
        }
    }
    next
}
