//! Mobile navigation menu toggle.
//!
//! The open/closed state lives only in the DOM: the nav list and hamburger
//! carry `open`, the main content and logo carry `hidden`. Each toggle inverts
//! both groups, so an even number of calls restores the original markup.

use crate::config::UiConfig;
use crate::page::{Page, PageElement};

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

pub struct MenuController<P> {
    page: P,
    config: UiConfig,
}

impl<P: Page> MenuController<P> {
    #[must_use]
    pub fn new(page: P, config: UiConfig) -> Self {
        Self { page, config }
    }

    /// Invert the open and hidden markers across the menu elements.
    pub fn toggle(&self) {
        for element in self.page.query_all(&self.config.menu_open_targets) {
            element.toggle_class(&self.config.open_class);
        }
        for element in self.page.query_all(&self.config.menu_hidden_targets) {
            element.toggle_class(&self.config.hidden_class);
        }
        log::debug!("menu toggled");
    }
}
