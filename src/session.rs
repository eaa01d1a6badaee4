//! Session Persistence
//!
//! Key-value session store behind a trait, so the login token and user
//! survive reloads in the browser and can be faked in tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::SessionError;
use crate::models::AuthSession;

const TOKEN_KEY: &str = "helpbridge.token";
const USER_KEY: &str = "helpbridge.user";

/// String key-value storage
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// Browser `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSession;

impl LocalStorageSession {
    fn storage() -> Result<web_sys::Storage, SessionError> {
        web_sys::window()
            .ok_or_else(|| SessionError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| SessionError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| SessionError::Unavailable("localStorage disabled".to_string()))
    }
}

impl SessionStore for LocalStorageSession {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| SessionError::Write(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| SessionError::Write(format!("{:?}", e)))
    }
}

/// In-memory store for tests
#[derive(Debug, Default)]
pub struct MemorySession {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Saves and restores the signed-in session
pub struct Session<S: SessionStore> {
    store: S,
}

impl Session<LocalStorageSession> {
    pub fn browser() -> Self {
        Self::new(LocalStorageSession)
    }
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn save(&self, session: &AuthSession) -> Result<(), SessionError> {
        let user = serde_json::to_string(&session.user).map_err(|e| SessionError::Write(e.to_string()))?;
        self.store.set(TOKEN_KEY, &session.token)?;
        self.store.set(USER_KEY, &user)
    }

    /// Previously saved session. A corrupt entry is dropped.
    pub fn restore(&self) -> Option<AuthSession> {
        let token = self.store.get(TOKEN_KEY)?;
        let raw_user = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw_user) {
            Ok(user) => Some(AuthSession { token, user }),
            Err(e) => {
                log::warn!("[Session] discarding unreadable user entry: {}", e);
                if let Err(e) = self.clear() {
                    log::warn!("[Session] {}", e);
                }
                None
            }
        }
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(USER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpbridge_core::{Role, User};

    fn auth() -> AuthSession {
        AuthSession {
            token: "tok-123".to_string(),
            user: User {
                id: "9".to_string(),
                name: "Meera".to_string(),
                email: "meera@seva.org".to_string(),
                role: Role::Ngo,
                is_profile_complete: true,
                is_verified: false,
            },
        }
    }

    #[test]
    fn test_save_and_restore() {
        let session = Session::new(MemorySession::default());
        assert_eq!(session.restore(), None);

        session.save(&auth()).unwrap();
        assert_eq!(session.restore(), Some(auth()));

        session.clear().unwrap();
        assert_eq!(session.restore(), None);
    }

    #[test]
    fn test_corrupt_user_is_discarded() {
        let store = MemorySession::default();
        store.set(TOKEN_KEY, "tok").unwrap();
        store.set(USER_KEY, "{not json").unwrap();

        let session = Session::new(store);
        assert_eq!(session.restore(), None);
        assert_eq!(session.store.get(TOKEN_KEY), None);
    }

    #[test]
    fn test_token_without_user_is_not_a_session() {
        let store = MemorySession::default();
        store.set(TOKEN_KEY, "tok").unwrap();
        assert_eq!(Session::new(store).restore(), None);
    }
}
