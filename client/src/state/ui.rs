//! Local UI chrome state (theme, mobile navigation).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of the data widgets so the header chrome
//! can evolve independently of the table, carousel, and demo state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Color theme applied to the page body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value persisted under the `theme` storage key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything unrecognized counts as absent.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Startup theme: a stored choice wins, then the OS dark-mode preference.
    #[must_use]
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.and_then(Self::from_stored) {
            Some(theme) => theme,
            None if prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// In-page navigation targets shown in the header menu.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("#home", "Home"),
    ("#features", "Features"),
    ("#penalties", "Penalties"),
    ("#analytics", "Analytics"),
    ("#demo", "Demo"),
    ("#contact", "Contact"),
];

/// UI state for the header: theme and mobile menu.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub menu_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following any nav link closes the mobile menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Class shared by the menu button and the nav list.
    #[must_use]
    pub fn menu_class(&self, base: &str) -> String {
        if self.menu_open { format!("{base} active") } else { base.to_owned() }
    }
}
