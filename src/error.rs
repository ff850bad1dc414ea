//! Error taxonomy for the UI behavior layer.
//!
//! None of these reach the visitor. Browser glue logs them at `warn` and
//! carries on with whatever interaction is still available.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("no element matches selector: {selector}")]
    MissingElement { selector: String },
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
    #[error("dom error: {0}")]
    Dom(String),
}

impl UiError {
    /// Stable code used as a prefix in console output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingElement { .. } => "E_MISSING_ELEMENT",
            Self::Config(_) => "E_CONFIG",
            Self::InvalidLogLevel(_) => "E_LOG_LEVEL",
            Self::Dom(_) => "E_DOM",
        }
    }
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Log `err` at `warn` with its code and the operation that produced it.
pub fn report(context: &str, err: &UiError) {
    log::warn!("{context}: [{}] {err}", err.error_code());
}
