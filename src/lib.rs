//! # site-ui
//!
//! Client-side behavior for the static site, compiled to WebAssembly: the
//! light/dark theme switch and the mobile navigation menu.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme state, start-up decision and toggle |
//! | [`menu`] | Hamburger menu toggle |
//! | [`page`] | DOM seam traits |
//! | [`storage`] | Persisted preference seam |
//! | [`config`] | Selectors, class names and colors, overridable from the page |
//! | [`error`] | Error taxonomy |
//! | [`bootstrap`] | Start-up sequence and click wiring |
//! | `dom` | `web-sys` implementations (feature `browser`) |

pub mod bootstrap;
pub mod config;
#[cfg(feature = "browser")]
pub mod dom;
pub mod error;
pub mod menu;
pub mod page;
pub mod storage;
pub mod theme;

/// WASM start hook.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run() {
    bootstrap::start();
}
