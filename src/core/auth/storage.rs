//! Session persistence
//!
//! Keeps the signed-in identity and its session token in a durable key-value
//! area. In the browser that is `localStorage`; on the server and in tests an
//! in-memory map stands in for it.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::credentials::Identity;
use super::service::AuthError;
use super::token::SessionToken;

/// Storage key for the session token
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Storage key for the serialized identity
pub const USER_KEY: &str = "user";

/// Minimal key-value surface of a `localStorage`-like area
pub trait KeyValueStore: Send + Sync + 'static {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), AuthError>;
    fn remove_item(&self, key: &str);
}

/// In-memory key-value area, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.read().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AuthError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| AuthError::Storage("storage lock poisoned".to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.write() {
            items.remove(key);
        }
    }
}

/// `window.localStorage`, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AuthError> {
        let storage = Self::storage()
            .ok_or_else(|| AuthError::Storage("localStorage not available".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| AuthError::Storage(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.remove_item(key) {
                    tracing::warn!("Failed to remove {} from localStorage: {:?}", key, e);
                }
            }
            None => tracing::warn!("localStorage not available, {} left in place", key),
        }
    }
}

// No browser during server rendering: the session always reads as absent.
#[cfg(not(feature = "hydrate"))]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), AuthError> {
        Ok(())
    }

    fn remove_item(&self, _key: &str) {}
}

/// What a successful [`SessionPersistence::load`] returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub identity: Identity,
    pub token: SessionToken,
}

/// Reads and writes the `auth_token` / `user` pair.
///
/// The two keys are written and removed together: no operation leaves one
/// of them behind without the other.
#[derive(Debug, Clone, Default)]
pub struct SessionPersistence<S> {
    store: S,
}

impl<S: KeyValueStore> SessionPersistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&self, identity: &Identity, token: &SessionToken) -> Result<(), AuthError> {
        let user_json =
            serde_json::to_string(identity).map_err(|e| AuthError::Storage(e.to_string()))?;

        let written = self
            .store
            .set_item(AUTH_TOKEN_KEY, token.as_str())
            .and_then(|_| self.store.set_item(USER_KEY, &user_json));

        if let Err(e) = written {
            tracing::warn!("Failed to persist session, clearing: {}", e);
            self.clear();
            return Err(e);
        }

        Ok(())
    }

    /// Load the stored session.
    ///
    /// Anything short of a complete, parsable pair is treated as "not logged
    /// in" and wiped.
    pub fn load(&self) -> Option<StoredSession> {
        let token = self.store.get_item(AUTH_TOKEN_KEY);
        let user_json = self.store.get_item(USER_KEY);

        let (token, user_json) = match (token, user_json) {
            (Some(token), Some(user_json)) if !token.is_empty() => (token, user_json),
            (None, None) => return None,
            _ => {
                tracing::warn!("{}: incomplete session entries", AuthError::CorruptSessionData);
                self.clear();
                return None;
            }
        };

        match serde_json::from_str::<Identity>(&user_json) {
            Ok(identity) => Some(StoredSession {
                identity,
                token: SessionToken::from(token),
            }),
            Err(e) => {
                tracing::warn!("{}: {}", AuthError::CorruptSessionData, e);
                self.clear();
                None
            }
        }
    }

    pub fn clear(&self) {
        self.store.remove_item(AUTH_TOKEN_KEY);
        self.store.remove_item(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::credentials::Role;
    use crate::core::auth::tests::FailingStore;

    fn identity() -> Identity {
        Identity {
            id: "1".to_string(),
            username: "admin".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_memory_storage_basics() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.set_item("a", "1").unwrap();
        assert_eq!(storage.get_item("a"), Some("1".to_string()));

        // Clones share the same area
        let clone = storage.clone();
        clone.remove_item("a");
        assert!(storage.get_item("a").is_none());
    }

    #[test]
    fn test_save_then_load() {
        let persistence = SessionPersistence::new(MemoryStorage::new());
        let token = SessionToken::generate();

        persistence.save(&identity(), &token).unwrap();
        let stored = persistence.load().unwrap();

        assert_eq!(stored.identity, identity());
        assert_eq!(stored.token, token);
    }

    #[test]
    fn test_save_uses_storage_layout() {
        let storage = MemoryStorage::new();
        let persistence = SessionPersistence::new(storage.clone());
        let token = SessionToken::from("abc".to_string());

        persistence.save(&identity(), &token).unwrap();

        assert_eq!(storage.get_item(AUTH_TOKEN_KEY), Some("abc".to_string()));
        let user: serde_json::Value =
            serde_json::from_str(&storage.get_item(USER_KEY).unwrap()).unwrap();
        assert_eq!(user["id"], "1");
        assert_eq!(user["username"], "admin");
        assert_eq!(user["role"], "admin");
        assert_eq!(user.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_clear_then_load() {
        let storage = MemoryStorage::new();
        let persistence = SessionPersistence::new(storage.clone());
        persistence
            .save(&identity(), &SessionToken::generate())
            .unwrap();

        persistence.clear();

        assert!(persistence.load().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_load_empty_storage() {
        let persistence = SessionPersistence::new(MemoryStorage::new());
        assert!(persistence.load().is_none());
    }

    #[test]
    fn test_load_corrupt_user_clears_both_keys() {
        let storage = MemoryStorage::new();
        storage.set_item(AUTH_TOKEN_KEY, "token").unwrap();
        storage.set_item(USER_KEY, "{not json").unwrap();

        let persistence = SessionPersistence::new(storage.clone());

        assert!(persistence.load().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_load_user_with_wrong_shape_is_corrupt() {
        let storage = MemoryStorage::new();
        storage.set_item(AUTH_TOKEN_KEY, "token").unwrap();
        storage
            .set_item(USER_KEY, r#"{"id":"1","username":"admin","role":"owner"}"#)
            .unwrap();

        let persistence = SessionPersistence::new(storage.clone());

        assert!(persistence.load().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_load_half_written_session_is_cleared() {
        let storage = MemoryStorage::new();
        storage
            .set_item(USER_KEY, r#"{"id":"1","username":"admin","role":"admin"}"#)
            .unwrap();

        let persistence = SessionPersistence::new(storage.clone());

        assert!(persistence.load().is_none());
        assert!(storage.is_empty());

        storage.set_item(AUTH_TOKEN_KEY, "token").unwrap();
        assert!(persistence.load().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_load_empty_token_is_cleared() {
        let storage = MemoryStorage::new();
        storage.set_item(AUTH_TOKEN_KEY, "").unwrap();
        storage
            .set_item(USER_KEY, r#"{"id":"1","username":"admin","role":"admin"}"#)
            .unwrap();

        let persistence = SessionPersistence::new(storage.clone());

        assert!(persistence.load().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_failed_save_leaves_nothing_behind() {
        let store = FailingStore::failing_writes(USER_KEY);
        let persistence = SessionPersistence::new(store.clone());

        let result = persistence.save(&identity(), &SessionToken::generate());

        assert!(matches!(result, Err(AuthError::Storage(_))));
        assert!(store.inner().is_empty());
    }

    #[test]
    fn test_clear_continues_past_failed_removal() {
        let store = FailingStore::failing_removals(AUTH_TOKEN_KEY);
        let persistence = SessionPersistence::new(store.clone());
        persistence.save(&identity(), &SessionToken::generate()).unwrap();

        persistence.clear();

        assert!(store.get_item(USER_KEY).is_none());
        // The leftover token alone never reads back as a session
        assert!(persistence.load().is_none());
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_browser_storage_without_browser_reads_absent() {
        let persistence = SessionPersistence::new(BrowserStorage);
        assert!(persistence.load().is_none());
    }
}
