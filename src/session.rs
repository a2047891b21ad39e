//! Client-side session persistence.
//!
//! The session is three independent entries in a key/value store: the bearer
//! token, the account email, and the serialized user profile. The store is
//! injectable so tests run against an in-memory map while the browser build
//! uses `localStorage`.
//!
//! ERROR HANDLING
//! ==============
//! A profile entry that fails to deserialize on restore degrades to "no
//! session" (logged, never propagated) so a corrupt entry cannot block
//! startup.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserProfile;

/// Storage key for the bearer token entry.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key for the account email entry.
pub const EMAIL_KEY: &str = "authEmail";
/// Storage key for the serialized user profile entry.
pub const USER_KEY: &str = "authUser";

/// Minimal string key/value store the session layer is written against.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store, used by tests and as the server-side fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// `localStorage`-backed store. Operations are no-ops when the browser
/// denies storage access (private mode quotas, disabled storage).
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Session store over any [`KeyValueStore`] backend.
#[derive(Clone, Debug, Default)]
pub struct TokenStore<S> {
    store: S,
}

#[cfg(feature = "hydrate")]
impl TokenStore<BrowserStore> {
    /// The `localStorage`-backed store used by the running app.
    pub fn browser() -> Self {
        Self::new(BrowserStore)
    }
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a full session. The profile entry is written last so a
    /// partial failure never pairs a stale profile with a new token.
    pub fn save(&mut self, token: &str, email: &str, user: &UserProfile) {
        self.store.set(TOKEN_KEY, token);
        self.store.set(EMAIL_KEY, email);
        if let Ok(serialized) = serde_json::to_string(user) {
            self.store.set(USER_KEY, &serialized);
        }
    }

    /// Restore the cached profile, if any. No token-validity check is made;
    /// a stale session is accepted until a later API call rejects it.
    pub fn restore(&self) -> Option<UserProfile> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::warn!("discarding unreadable session profile: {e}");
                None
            }
        }
    }

    /// The persisted bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// The persisted account email, if any.
    pub fn email(&self) -> Option<String> {
        self.store.get(EMAIL_KEY)
    }

    /// Remove all session entries. Idempotent.
    pub fn clear(&mut self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(EMAIL_KEY);
        self.store.remove(USER_KEY);
    }
}
