//! Shared session-store constructor for all platforms.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate [`store::SessionStorage`]:
//! - **Web** (WASM + `web` feature): browser localStorage via [`store::WebStorage`]
//! - **Desktop** (native): filesystem via [`store::FileStorage`]

/// Create a platform-appropriate session store.
///
/// Constructing one is cheap; call sites build a fresh handle per
/// operation rather than passing one around.
pub fn session_store() -> store::SessionStore<impl store::SessionStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::SessionStore::new(store::WebStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("jobportal")
            .join("session");
        store::SessionStore::new(store::FileStorage::new(base))
    }
}
