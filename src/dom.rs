//! `web-sys` implementations of the page and storage seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches browser APIs. JS exceptions are
//! turned into [`UiError::Dom`] and logged; callers see an empty query result
//! or a skipped mutation, never a panic.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, Storage, Window};

use crate::error::{UiError, report};
use crate::page::{Page, PageElement};
use crate::storage::PreferenceStore;

const BACKGROUND_PROPERTY: &str = "background-color";

// =============================================================
// Page
// =============================================================

#[derive(Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }
}

impl Page for WebPage {
    type Element = WebElement;

    fn background(&self) -> String {
        let Some(body) = self.body() else {
            return String::new();
        };
        match body.style().get_property_value(BACKGROUND_PROPERTY) {
            Ok(value) => value,
            Err(err) => {
                report("read background", &UiError::from(err));
                String::new()
            }
        }
    }

    fn set_background(&self, value: &str) {
        let Some(body) = self.body() else {
            log::debug!("no <body>; background unchanged");
            return;
        };
        if let Err(err) = body.style().set_property(BACKGROUND_PROPERTY, value) {
            report("set background", &UiError::from(err));
        }
    }

    fn query_all(&self, selectors: &str) -> Vec<WebElement> {
        let list = match self.document.query_selector_all(selectors) {
            Ok(list) => list,
            Err(err) => {
                report(selectors, &UiError::from(err));
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_ref::<Element>().cloned())
            .map(WebElement)
            .collect()
    }

    fn on_click<F>(&self, selector: &str, handler: F) -> Result<(), UiError>
    where
        F: FnMut() + 'static,
    {
        let target = self
            .document
            .query_selector(selector)?
            .ok_or_else(|| UiError::MissingElement { selector: selector.to_owned() })?;
        let mut handler = handler;
        let cb = Closure::wrap(Box::new(move |_event: web_sys::Event| handler()) as Box<dyn FnMut(web_sys::Event)>);
        target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
        Ok(())
    }

    fn media_matches(&self, query: &str) -> Option<bool> {
        match self.window.match_media(query) {
            Ok(list) => list.map(|mq| mq.matches()),
            Err(err) => {
                report(query, &UiError::from(err));
                None
            }
        }
    }

    fn inline_text(&self, id: &str) -> Option<String> {
        self.document.get_element_by_id(id)?.text_content()
    }
}

pub struct WebElement(Element);

impl PageElement for WebElement {
    fn within(&self, selector: &str) -> bool {
        match self.0.closest(selector) {
            Ok(found) => found.is_some(),
            Err(err) => {
                report(selector, &UiError::from(err));
                false
            }
        }
    }

    fn add_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().add_1(class) {
            report("add class", &UiError::from(err));
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().remove_1(class) {
            report("remove class", &UiError::from(err));
        }
    }

    fn toggle_class(&self, class: &str) {
        if let Err(err) = self.0.class_list().toggle(class) {
            report("toggle class", &UiError::from(err));
        }
    }
}

// =============================================================
// Storage
// =============================================================

/// `localStorage`, or nothing when the browser denies it.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                report("localStorage", &UiError::from(err));
                None
            }
        };
        if storage.is_none() {
            log::debug!("localStorage unavailable; theme will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                report("read preference", &UiError::from(err));
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            log::debug!("dropping {key}={value}: no storage");
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            report("write preference", &UiError::from(err));
        }
    }
}

// =============================================================
// Document lifecycle
// =============================================================

/// Run `f` once the DOM is parsed: now if it already is, else on `DOMContentLoaded`.
pub fn on_ready(document: &Document, f: impl FnOnce() + 'static) -> Result<(), UiError> {
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let cb: Closure<dyn FnMut(web_sys::Event)> = Closure::once(move |_event: web_sys::Event| f());
    document.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
