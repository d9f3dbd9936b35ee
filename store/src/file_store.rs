//! # Filesystem-backed session storage
//!
//! [`FileStorage`] is a [`SessionStorage`] implementation that persists each
//! session field to its own file. It is used on desktop, where there is no
//! localStorage to lean on, to keep the user signed in across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── loggedIn
//! ├── userId
//! ├── firstName
//! └── lastName
//! ```
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base directory.

use std::path::PathBuf;

use crate::session::SessionStorage;

/// Filesystem-backed SessionStorage for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl SessionStorage for FileStorage {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    async fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.key_path(key), value);
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Session, SessionStore};

    #[tokio::test]
    async fn test_file_storage_roundtrip() {
        let dir = std::env::temp_dir().join(format!("jobportal_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = SessionStore::new(FileStorage::new(dir.clone()));
        let session = Session {
            logged_in: true,
            user_id: Some("42".to_string()),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
        };
        store.save(&session).await;

        // Re-open from same directory
        let store2 = SessionStore::new(FileStorage::new(dir.clone()));
        assert_eq!(store2.load().await, session);

        store2.clear().await;
        assert_eq!(store2.load().await, Session::default());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_missing_directory_reads_as_signed_out() {
        let dir = std::env::temp_dir().join(format!("jobportal_missing_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = SessionStore::new(FileStorage::new(dir));
        assert_eq!(store.load().await, Session::default());
    }
}
