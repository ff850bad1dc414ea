//! Light/dark theme state and the toggle that applies it to the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dark mode is expressed three ways that must agree after every toggle: the
//! in-memory [`Theme`], a `dark` marker class on matched content elements, and
//! the value persisted under the storage key. The body background follows too.
//!
//! TRADE-OFFS
//! ==========
//! Content elements are re-queried on each toggle rather than cached, so
//! elements added after a toggle stay unmarked until the next one.

use std::fmt;

use crate::config::UiConfig;
use crate::page::{Page, PageElement};
use crate::storage::PreferenceStore;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media query for the OS dark-mode signal.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// OS dark-mode preference; an environment without `matchMedia` counts as light.
#[must_use]
pub fn prefers_dark<P: Page>(page: &P) -> bool {
    page.media_matches(PREFERS_DARK_QUERY) == Some(true)
}

/// Whether the page should switch to dark on load.
///
/// Only an explicit `"light"` suppresses the OS preference; a stored `"dark"`,
/// anything unrecognized, or nothing at all defers to it.
#[must_use]
pub fn should_start_dark(stored: Option<&str>, prefers_dark: bool) -> bool {
    stored != Some(Theme::Light.as_str()) && prefers_dark
}

/// Page-lifetime theme state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
    /// Inline body background at start-up; restored when returning to light.
    pub original_background: String,
}

pub struct ThemeController<P, S> {
    page: P,
    store: S,
    config: UiConfig,
    state: ThemeState,
}

impl<P: Page, S: PreferenceStore> ThemeController<P, S> {
    /// Create a light-mode controller, capturing the current body background.
    pub fn new(page: P, store: S, config: UiConfig) -> Self {
        let original_background = page.background();
        Self { page, store, config, state: ThemeState { theme: Theme::Light, original_background } }
    }

    /// Apply the start-up theme from the stored preference and OS signal.
    pub fn initialize(&mut self, prefers_dark: bool) -> Theme {
        let stored = self.store.get(&self.config.storage_key);
        if should_start_dark(stored.as_deref(), prefers_dark) {
            log::debug!("starting in dark mode (stored={stored:?})");
            self.toggle();
        }
        self.state.theme
    }

    /// Flip the theme, repaint the page, and persist the new value.
    pub fn toggle(&mut self) -> Theme {
        let next = self.state.theme.flipped();
        self.state.theme = next;

        let background = match next {
            Theme::Dark => self.config.dark_background.as_str(),
            Theme::Light => self.state.original_background.as_str(),
        };
        self.page.set_background(background);

        let dark_class = self.config.dark_class.as_str();
        let mut marked = 0usize;
        for element in self.page.query_all(&self.config.content_selectors) {
            if element.within(&self.config.excluded_container) {
                continue;
            }
            match next {
                Theme::Dark => element.add_class(dark_class),
                Theme::Light => element.remove_class(dark_class),
            }
            marked += 1;
        }

        self.store.set(&self.config.storage_key, next.as_str());
        log::info!("theme set to {next} ({marked} elements)");
        next
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    #[must_use]
    pub fn state(&self) -> &ThemeState {
        &self.state
    }
}
