//! Durable storage of the signed-in doctor's session.
//!
//! The store sits on a narrow key-value backend: `localStorage` in the
//! browser, an in-memory map everywhere else. Screens only ever see
//! [`SessionStore::read`], [`SessionStore::write`] and [`SessionStore::clear`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use shared_types::Session;

pub const ACCESS_TOKEN_KEY: &str = "doctor_access_token";
pub const USER_ID_KEY: &str = "doctor_user_id";
pub const ROLE_KEY: &str = "doctor_role";
pub const AUTHENTICATED_KEY: &str = "doctor_authenticated";

const ALL_KEYS: [&str; 4] = [ACCESS_TOKEN_KEY, USER_ID_KEY, ROLE_KEY, AUTHENTICATED_KEY];

/// Minimal string key-value backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local backend used off the web and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage`, scoped to the page origin.
#[cfg(feature = "web")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

#[cfg(feature = "web")]
impl BrowserStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "web")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let written = Self::storage().map(|s| s.set_item(key, value).is_ok());
        if written != Some(true) {
            tracing::warn!(key, "localStorage write failed");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Reads and writes the whole session at once; never a single field.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn KeyValueStore>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl SessionStore {
    pub fn new(backend: Rc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// In-memory store; handy for tests and non-browser targets.
    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStore::new()))
    }

    /// The platform default: `localStorage` on the web, memory elsewhere.
    pub fn platform_default() -> Self {
        #[cfg(feature = "web")]
        {
            Self::new(Rc::new(BrowserStore))
        }
        #[cfg(not(feature = "web"))]
        {
            Self::in_memory()
        }
    }

    /// The stored session, or `None` when any part is missing.
    pub fn read(&self) -> Option<Session> {
        if self.backend.get(AUTHENTICATED_KEY).as_deref() != Some("true") {
            return None;
        }
        Session::new(
            self.backend.get(ACCESS_TOKEN_KEY)?,
            self.backend.get(USER_ID_KEY)?,
            self.backend.get(ROLE_KEY)?,
        )
    }

    /// Like [`read`](Self::read) but only for the doctor role.
    pub fn read_doctor(&self) -> Option<Session> {
        self.read().filter(Session::is_doctor)
    }

    pub fn write(&self, session: &Session) {
        self.backend.set(ACCESS_TOKEN_KEY, &session.access_token);
        self.backend.set(USER_ID_KEY, &session.user_id);
        self.backend.set(ROLE_KEY, &session.role);
        self.backend.set(AUTHENTICATED_KEY, "true");
    }

    pub fn clear(&self) {
        for key in ALL_KEYS {
            self.backend.remove(key);
        }
    }
}
