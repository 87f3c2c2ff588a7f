use std::cell::RefCell;
use std::collections::HashMap;

use lampunggo_shared::{Session, User};

use super::*;
use crate::web::route::{Access, AppRoute, check_access};

// =========================================================
// In-memory storage double
// =========================================================

#[derive(Debug, Default, PartialEq)]
struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    /// Keys whose writes are refused, to simulate a full store.
    fail_keys: RefCell<Vec<String>>,
}

impl MemoryStorage {
    fn failing_on(key: &str) -> Self {
        let storage = Self::default();
        storage.fail_keys.borrow_mut().push(key.to_string());
        storage
    }

    fn raw_set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl StorageAdapter for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        if self.fail_keys.borrow().iter().any(|k| k == key) {
            return false;
        }
        self.raw_set(key, value);
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.entries.borrow_mut().remove(key).is_some()
    }
}

fn sample_session() -> Session {
    Session {
        token: "1|abcdef".to_string(),
        user: User {
            name: "Sari".to_string(),
            email: "sari@example.com".to_string(),
        },
    }
}

#[test]
fn get_is_none_before_any_set() {
    let store = SessionStore::new(MemoryStorage::default());
    assert_eq!(store.get(), None);
    assert_eq!(store.token(), None);
    assert!(!store.is_logged_in());
}

#[test]
fn set_then_get_round_trips() {
    let store = SessionStore::new(MemoryStorage::default());
    assert!(store.set(&sample_session()));
    assert_eq!(store.get(), Some(sample_session()));
    assert_eq!(store.token().as_deref(), Some("1|abcdef"));
}

#[test]
fn clear_removes_both_halves() {
    let store = SessionStore::new(MemoryStorage::default());
    store.set(&sample_session());
    store.clear();
    assert_eq!(store.get(), None);
    assert_eq!(store.token(), None);
}

#[test]
fn token_without_user_is_not_a_session() {
    let storage = MemoryStorage::default();
    storage.raw_set(TOKEN_KEY, "orphan-token");
    let store = SessionStore::new(storage);

    assert_eq!(store.get(), None);
    assert!(!store.is_logged_in());
    // The raw token still decorates outgoing requests.
    assert_eq!(store.token().as_deref(), Some("orphan-token"));
}

#[test]
fn user_without_token_is_not_a_session() {
    let storage = MemoryStorage::default();
    storage.raw_set(USER_KEY, r#"{"name":"Sari","email":"sari@example.com"}"#);
    let store = SessionStore::new(storage);
    assert_eq!(store.get(), None);
}

#[test]
fn corrupt_user_json_is_treated_as_absent() {
    let storage = MemoryStorage::default();
    storage.raw_set(TOKEN_KEY, "1|abcdef");
    storage.raw_set(USER_KEY, "not json at all");
    let store = SessionStore::new(storage);
    assert_eq!(store.get(), None);
    assert!(!store.is_logged_in());
}

#[test]
fn refused_token_write_rolls_back_the_user() {
    let store = SessionStore::new(MemoryStorage::failing_on(TOKEN_KEY));
    assert!(!store.set(&sample_session()));
    // No half-written state left behind.
    assert_eq!(store.get(), None);
    assert_eq!(store.storage.get(USER_KEY), None);
}

#[test]
fn update_user_keeps_the_token() {
    let store = SessionStore::new(MemoryStorage::default());
    store.set(&sample_session());

    let renamed = User {
        name: "Sari Dewi".to_string(),
        email: "sari@example.com".to_string(),
    };
    assert!(store.update_user(&renamed));

    let session = store.get().unwrap();
    assert_eq!(session.token, "1|abcdef");
    assert_eq!(session.user, renamed);
}

#[test]
fn update_user_without_a_session_is_a_no_op() {
    let store = SessionStore::new(MemoryStorage::default());
    assert!(!store.update_user(&sample_session().user));
    assert_eq!(store.get(), None);
}

#[test]
fn login_transition_flips_the_guard() {
    let store = SessionStore::new(MemoryStorage::default());

    // Guest: protected routes bounce to the login screen.
    assert_eq!(
        check_access(&AppRoute::Home, store.is_logged_in()),
        Access::Redirect(AppRoute::Login)
    );

    store.set(&sample_session());

    // Authenticated: protected routes open, auth screens bounce home.
    assert_eq!(
        check_access(&AppRoute::Home, store.is_logged_in()),
        Access::Granted
    );
    assert_eq!(
        check_access(&AppRoute::Login, store.is_logged_in()),
        Access::Redirect(AppRoute::Home)
    );
}
