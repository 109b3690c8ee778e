//! Browser-local preference storage for anonymous viewers.

#[cfg(test)]
#[path = "local_test.rs"]
mod local_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::{Channel, PersistError, ThemeStore};
use crate::theme::ThemeMode;

/// String key/value storage with `localStorage` semantics.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a [`PersistError`] if the backing storage rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError>;
}

/// In-process storage used off-browser.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`, if the browser exposes it.
#[cfg(feature = "hydrate")]
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::debug!("localStorage unavailable");
        }
        Self { storage }
    }
}

#[cfg(feature = "hydrate")]
impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.storage
            .as_ref()
            .ok_or(PersistError::StorageUnavailable)?
            .set_item(key, value)
            .map_err(|e| PersistError::Storage(format!("{e:?}")))
    }
}

/// Preference channel backed by [`KeyValueStorage`].
pub struct LocalStore {
    storage: Rc<dyn KeyValueStorage>,
    key: String,
}

impl LocalStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Saved preference, light when nothing was saved.
    #[must_use]
    pub fn load(&self) -> ThemeMode {
        ThemeMode::from_stored(self.storage.get_item(&self.key).as_deref())
    }
}

impl ThemeStore for LocalStore {
    fn channel(&self) -> Channel {
        Channel::Local
    }

    fn persist(&self, mode: ThemeMode) {
        match self.storage.set_item(&self.key, mode.as_stored()) {
            Ok(()) => log::debug!("saved {}={} to local storage", self.key, mode.as_stored()),
            Err(e) => log::error!("error saving dark mode preference: {e}"),
        }
    }
}
