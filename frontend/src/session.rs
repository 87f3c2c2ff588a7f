//! Durable record of the authenticated identity.
//!
//! Token and profile live side by side in browser storage under the keys the
//! backend dashboard historically used (`token`, `user`). The two are written
//! and removed together: a half-present pair never reads back as a session,
//! so the route guard cannot be fooled by corrupt storage.

use lampunggo_shared::{Session, User};

use crate::web::LocalStorage;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Minimal key-value surface the store needs. Browser storage implements it;
/// tests substitute an in-memory map.
pub trait StorageAdapter {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str) -> bool;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStore<S: StorageAdapter = LocalStorage> {
    storage: S,
}

impl<S: StorageAdapter> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist a fresh session. The profile goes in first so a refused token
    /// write cannot leave a token behind without its user.
    pub fn set(&self, session: &Session) -> bool {
        let user_json = match serde_json::to_string(&session.user) {
            Ok(json) => json,
            Err(_) => return false,
        };
        if !self.storage.set(USER_KEY, &user_json) {
            return false;
        }
        if !self.storage.set(TOKEN_KEY, &session.token) {
            self.storage.remove(USER_KEY);
            return false;
        }
        true
    }

    /// The current session, or `None` when either half is missing or the
    /// stored profile does not parse.
    pub fn get(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY)?;
        let user: User = serde_json::from_str(&self.storage.get(USER_KEY)?).ok()?;
        Some(Session { token, user })
    }

    /// Raw bearer token for request decoration. Deliberately looser than
    /// [`get`](Self::get): a valid token still decorates requests even if the
    /// cached profile record has rotted.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    pub fn is_logged_in(&self) -> bool {
        self.get().is_some()
    }

    /// Replace the stored profile, keeping the token. No-op without a
    /// complete session.
    pub fn update_user(&self, user: &User) -> bool {
        match self.get() {
            Some(mut session) => {
                session.user = user.clone();
                self.set(&session)
            }
            None => false,
        }
    }

    /// Drop both halves.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests;
