//! Persisted session slots.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives reloads through two string slots: the bearer token and
//! the author hint (`"true"`/`"false"`). `BrowserStorage` writes them to
//! `localStorage` in hydrate builds and no-ops on the server; `MemoryStorage`
//! keeps them in-process for tests and non-browser hosts.
//!
//! TRADE-OFFS
//! ==========
//! Browser storage is best-effort: quota or privacy-mode failures are ignored,
//! which at worst costs a re-login after reload.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const TOKEN_KEY: &str = "token";
pub const IS_AUTHOR_KEY: &str = "isAuthor";

/// Key/value string storage that outlives the running client.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Encode the author hint the way it is stored.
pub fn encode_flag(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Only the exact string `"true"` counts as set.
pub fn decode_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage. Clones share the same slots.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.slots.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}
