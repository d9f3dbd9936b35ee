//! Typed session state over a key/value backend.
//!
//! The stored shape is four string entries so that sessions written by
//! earlier builds of the portal keep working:
//!
//! | key         | value                          |
//! |-------------|--------------------------------|
//! | `loggedIn`  | `"true"` while signed in       |
//! | `userId`    | account id, may be absent      |
//! | `firstName` | display name, first part       |
//! | `lastName`  | display name, last part        |

pub const KEY_LOGGED_IN: &str = "loggedIn";
pub const KEY_USER_ID: &str = "userId";
pub const KEY_FIRST_NAME: &str = "firstName";
pub const KEY_LAST_NAME: &str = "lastName";

const ALL_KEYS: [&str; 4] = [KEY_LOGGED_IN, KEY_USER_ID, KEY_FIRST_NAME, KEY_LAST_NAME];

/// Flat async key/value storage for session fields.
///
/// Writes are fire-and-forget: backends swallow their own I/O errors and a
/// failed read simply comes back as `None`.
pub trait SessionStorage {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = ()>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = ()>;
}

/// A signed-in user, or the default signed-out state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub logged_in: bool,
    /// Account id of the signed-in user. Sessions written by builds that
    /// predate the id key restore without one.
    pub user_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
}

impl Session {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Loads and saves [`Session`]s through a [`SessionStorage`] backend.
pub struct SessionStore<S: SessionStorage> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Restore the persisted session.
    ///
    /// Only a stored `loggedIn` with a non-empty value counts as signed in;
    /// anything else restores the signed-out default without touching the
    /// remaining keys.
    pub async fn load(&self) -> Session {
        let logged_in = matches!(
            self.storage.get(KEY_LOGGED_IN).await.as_deref(),
            Some(v) if !v.is_empty()
        );
        if !logged_in {
            return Session::default();
        }
        Session {
            logged_in: true,
            user_id: self.storage.get(KEY_USER_ID).await,
            first_name: self.storage.get(KEY_FIRST_NAME).await.unwrap_or_default(),
            last_name: self.storage.get(KEY_LAST_NAME).await.unwrap_or_default(),
        }
    }

    /// Persist a session, field by field.
    ///
    /// Saving a signed-out session is the same as [`clear`](Self::clear).
    pub async fn save(&self, session: &Session) {
        if !session.logged_in {
            self.clear().await;
            return;
        }
        self.storage.set(KEY_LOGGED_IN, "true").await;
        match &session.user_id {
            Some(id) => self.storage.set(KEY_USER_ID, id).await,
            None => self.storage.remove(KEY_USER_ID).await,
        }
        self.storage.set(KEY_FIRST_NAME, &session.first_name).await;
        self.storage.set(KEY_LAST_NAME, &session.last_name).await;
    }

    /// Remove every session key. Safe to call when nothing is stored.
    pub async fn clear(&self) {
        for key in ALL_KEYS {
            self.storage.remove(key).await;
        }
    }
}
