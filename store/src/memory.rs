use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStorage;

/// In-memory storage backend. Clones share the same map, so a clone handed
/// to an async task sees later writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    async fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Session, SessionStore, KEY_LOGGED_IN, KEY_USER_ID};

    fn sample_session() -> Session {
        Session {
            logged_in: true,
            user_id: Some("1".to_string()),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fresh_store_is_signed_out() {
        let store = SessionStore::new(MemoryStorage::new());
        let session = store.load().await;
        assert_eq!(session, Session::default());
        assert!(!session.logged_in);
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let store = SessionStore::new(MemoryStorage::new());
        let session = sample_session();
        store.save(&session).await;
        assert_eq!(store.load().await, session);
    }

    #[tokio::test]
    async fn test_load_without_user_id() {
        let storage = MemoryStorage::new();
        storage.set(KEY_LOGGED_IN, "true").await;
        storage.set("firstName", "Ada").await;
        storage.set("lastName", "Lovelace").await;

        let session = SessionStore::new(storage).load().await;
        assert!(session.logged_in);
        assert_eq!(session.user_id, None);
        assert_eq!(session.display_name(), "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_empty_logged_in_value_means_signed_out() {
        let storage = MemoryStorage::new();
        storage.set(KEY_LOGGED_IN, "").await;
        storage.set(KEY_USER_ID, "1").await;

        let session = SessionStore::new(storage).load().await;
        assert_eq!(session, Session::default());
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.save(&sample_session()).await;
        store.clear().await;

        assert_eq!(storage.get(KEY_LOGGED_IN).await, None);
        assert_eq!(storage.get(KEY_USER_ID).await, None);
        assert_eq!(store.load().await, Session::default());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store = SessionStore::new(MemoryStorage::new());
        store.clear().await;
        store.clear().await;
        assert_eq!(store.load().await, Session::default());
    }

    #[tokio::test]
    async fn test_saving_signed_out_session_clears() {
        let store = SessionStore::new(MemoryStorage::new());
        store.save(&sample_session()).await;
        store.save(&Session::default()).await;
        assert_eq!(store.load().await, Session::default());
    }
}
