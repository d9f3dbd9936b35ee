//! Browser localStorage-backed session storage (web builds only).

use crate::session::SessionStorage;

/// SessionStorage over `window.localStorage`.
///
/// When localStorage is unavailable (storage disabled, sandboxed frame)
/// reads come back empty and writes are dropped, leaving the app usable
/// within the current page load.
#[derive(Clone, Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStorage for WebStorage {
    async fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    async fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
