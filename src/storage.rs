//! Durable key/value seam for the persisted theme preference.

/// String key/value storage that survives reloads.
///
/// Reads of a missing key return `None`. Writes are best-effort: an
/// implementation that cannot persist drops the value and logs it.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);
}
