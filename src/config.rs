//! Page vocabulary: selectors, marker classes, colors and the storage key.
//!
//! SYSTEM CONTEXT
//! ==============
//! The defaults describe the markup the site ships with. A page may embed a
//! `<script type="application/json" id="site-ui-config">` object to override
//! any field; omitted fields keep their default.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::UiError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Id of the optional inline JSON configuration element.
pub const CONFIG_ELEMENT_ID: &str = "site-ui-config";

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_DARK_BACKGROUND: &str = "rgb(50, 50, 50)";
pub const DEFAULT_CONTENT_SELECTORS: &str = "h1, h2, h3, h4, h5, h6, p, li, span, a, i, code, .main-content";
pub const DEFAULT_EXCLUDED_CONTAINER: &str = "code.multiline";
pub const DEFAULT_THEME_SWITCH: &str = "#color-scheme";
pub const DEFAULT_HAMBURGER: &str = "#hamburger";
pub const DEFAULT_MENU_OPEN_TARGETS: &str = "header .header-list, .hamburger";
pub const DEFAULT_MENU_HIDDEN_TARGETS: &str = ".main-content, .header-logo";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Body background applied in dark mode.
    pub dark_background: String,
    /// Elements that receive the dark marker.
    pub content_selectors: String,
    /// Elements inside (or equal to) a match are never marked.
    pub excluded_container: String,
    pub dark_class: String,
    pub theme_switch: String,
    pub hamburger: String,
    pub menu_open_targets: String,
    pub open_class: String,
    pub menu_hidden_targets: String,
    pub hidden_class: String,
    /// Console log level name (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            dark_background: DEFAULT_DARK_BACKGROUND.to_owned(),
            content_selectors: DEFAULT_CONTENT_SELECTORS.to_owned(),
            excluded_container: DEFAULT_EXCLUDED_CONTAINER.to_owned(),
            dark_class: "dark".to_owned(),
            theme_switch: DEFAULT_THEME_SWITCH.to_owned(),
            hamburger: DEFAULT_HAMBURGER.to_owned(),
            menu_open_targets: DEFAULT_MENU_OPEN_TARGETS.to_owned(),
            open_class: "open".to_owned(),
            menu_hidden_targets: DEFAULT_MENU_HIDDEN_TARGETS.to_owned(),
            hidden_class: "hidden".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse a JSON object of overrides on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse the configured log level.
    pub fn log_level(&self) -> Result<log::LevelFilter, UiError> {
        log::LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| UiError::InvalidLogLevel(self.log_level.clone()))
    }
}
