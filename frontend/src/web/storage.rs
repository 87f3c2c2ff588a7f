//! Browser `localStorage` wrapper.
//!
//! Thin shim over `web_sys::Storage`. All persistent client state — the
//! session record and the install-prompt record — goes through this one type.

use crate::session::StorageAdapter;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl StorageAdapter for LocalStorage {
    /// `Some` only when the key exists and the browser exposes storage.
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// `false` when storage is unavailable or the write was refused (quota,
    /// private mode).
    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn remove(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
