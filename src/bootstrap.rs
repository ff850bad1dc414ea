//! One-time page start-up.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`boot`] captures the original background, applies the start-up theme and
//! builds both controllers. [`wire`] does that and then attaches the
//! controllers to the theme-switch and hamburger clicks. A missing control
//! leaves only that interaction inert. In the browser, `start` waits for the
//! DOM to be parsed, reads the inline configuration, and calls [`wire`].
//!
//! DESIGN
//! ======
//! Controllers are shared with their click closures through `Rc<RefCell<_>>`.
//! Everything runs on the UI thread and handlers never re-enter each other, so
//! a borrow is always free when a click arrives.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{CONFIG_ELEMENT_ID, UiConfig};
use crate::error::{UiError, report};
use crate::menu::MenuController;
use crate::page::Page;
use crate::storage::PreferenceStore;
use crate::theme::{ThemeController, prefers_dark};

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

pub struct Controllers<P, S> {
    pub theme: Rc<RefCell<ThemeController<P, S>>>,
    pub menu: Rc<MenuController<P>>,
}

/// Controllers plus whatever could not be attached.
pub struct Wiring<P, S> {
    pub controllers: Controllers<P, S>,
    pub failures: Vec<UiError>,
}

/// Initialize the theme and build the controllers for `page`.
pub fn boot<P, S>(page: P, store: S, prefers_dark: bool, config: &UiConfig) -> Controllers<P, S>
where
    P: Page + Clone,
    S: PreferenceStore,
{
    let mut theme = ThemeController::new(page.clone(), store, config.clone());
    let initial = theme.initialize(prefers_dark);
    log::info!("site-ui ready: theme={initial} prefers_dark={prefers_dark}");
    Controllers { theme: Rc::new(RefCell::new(theme)), menu: Rc::new(MenuController::new(page, config.clone())) }
}

/// Page overrides from the inline JSON element, or defaults when it is absent.
///
/// Call only once the DOM is parsed; an element later in the document is
/// otherwise not there yet.
pub fn load_config<P: Page>(page: &P) -> Result<UiConfig, UiError> {
    match page.inline_text(CONFIG_ELEMENT_ID) {
        Some(raw) => UiConfig::from_json(&raw),
        None => Ok(UiConfig::default()),
    }
}

/// Boot, then attach the theme switch and hamburger click handlers.
///
/// Each attachment fails on its own; failures are logged and returned.
pub fn wire<P, S>(page: P, store: S, config: &UiConfig) -> Wiring<P, S>
where
    P: Page + Clone + 'static,
    S: PreferenceStore + 'static,
{
    let controllers = boot(page.clone(), store, prefers_dark(&page), config);
    let mut failures = Vec::new();

    let theme = Rc::clone(&controllers.theme);
    if let Err(err) = page.on_click(&config.theme_switch, move || {
        theme.borrow_mut().toggle();
    }) {
        report("theme switch", &err);
        failures.push(err);
    }

    let menu = Rc::clone(&controllers.menu);
    if let Err(err) = page.on_click(&config.hamburger, move || menu.toggle()) {
        report("hamburger", &err);
        failures.push(err);
    }

    Wiring { controllers, failures }
}

#[cfg(feature = "browser")]
pub use browser::start;

#[cfg(feature = "browser")]
mod browser {
    use web_sys::Window;

    use super::{load_config, wire};
    use crate::config::UiConfig;
    use crate::dom::{self, LocalStore, WebPage};
    use crate::error::{UiError, report};

    /// Browser entry point: install the panic hook, then boot on DOM ready.
    pub fn start() {
        console_error_panic_hook::set_once();

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let page = WebPage::new(window.clone(), document.clone());
        if let Err(err) = dom::on_ready(&document, move || run(page, &window)) {
            report("bootstrap", &err);
        }
    }

    fn run(page: WebPage, window: &Window) {
        let parsed = load_config(&page);
        let config = match &parsed {
            Ok(config) => config.clone(),
            Err(_) => UiConfig::default(),
        };
        let rejected_level = init_logging(&config);
        if let Err(err) = &parsed {
            report("config", err);
        }
        if let Some(err) = rejected_level {
            report("log level", &err);
        }

        wire(page, LocalStore::new(window), &config);
    }

    /// Install the console logger; returns the level error if the name was unknown.
    fn init_logging(config: &UiConfig) -> Option<UiError> {
        let (filter, rejected) = match config.log_level() {
            Ok(filter) => (filter, None),
            Err(err) => (log::LevelFilter::Info, Some(err)),
        };
        if let Some(level) = filter.to_level() {
            if console_log::init_with_level(level).is_err() {
                log::debug!("console logger already installed");
            }
        }
        rejected
    }
}
