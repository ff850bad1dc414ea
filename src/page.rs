//! The DOM seam.
//!
//! DESIGN
//! ======
//! Controllers only talk to the document through these two traits, so the
//! theme and menu logic runs against an in-memory tree in native tests and
//! against `web-sys` in the browser (see `dom`). Methods take `&self`: DOM
//! handles are shared references to mutable browser state, and the fake
//! mirrors that with interior mutability.
//!
//! Failures inside an implementation (a selector the browser rejects, a
//! class-list exception) are logged there and surface here as an empty result
//! or a skipped mutation. Click wiring is the exception: a missing control
//! comes back as [`UiError::MissingElement`] so start-up can report it.

use crate::error::UiError;

#[cfg(test)]
#[path = "page_fake_test.rs"]
pub(crate) mod fake;

/// A queryable document with a styleable body.
pub trait Page {
    type Element: PageElement;

    /// The body's inline `background-color`, empty when unset.
    fn background(&self) -> String;

    /// Set the body's inline `background-color`. An empty value clears it.
    fn set_background(&self, value: &str);

    /// All elements matching a comma-separated selector list, in document order.
    fn query_all(&self, selectors: &str) -> Vec<Self::Element>;

    /// Run `handler` on every click of the first element matching `selector`.
    ///
    /// Handlers stay registered for the page's lifetime.
    fn on_click<F>(&self, selector: &str, handler: F) -> Result<(), UiError>
    where
        F: FnMut() + 'static;

    /// Result of a media query, or `None` when the environment cannot answer it.
    fn media_matches(&self, query: &str) -> Option<bool>;

    /// Text content of the element with `id`, if present.
    fn inline_text(&self, id: &str) -> Option<String>;
}

pub trait PageElement {
    /// `true` when the element or one of its ancestors matches `selector`.
    fn within(&self, selector: &str) -> bool;

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    fn toggle_class(&self, class: &str);
}
