//! Key-value persistence for UI preferences.
//!
//! `LocalStorage` is the browser store. When `localStorage` is missing
//! (private mode, sandboxed iframes) or refuses a write, values go to a
//! per-page `MemoryStore` instead, so they still hold until reload.

use contracts::preferences::{decode_bool, encode_bool, PreferenceKey};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

thread_local! {
    static FALLBACK: MemoryStore = MemoryStore::default();
}

/// Browser `localStorage`, backed by an in-memory map when unusable.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        // A refused write leaves the fallback newer than localStorage.
        if let Some(value) = FALLBACK.with(|fallback| fallback.get(key)) {
            return Some(value);
        }
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => match storage.set_item(key, value) {
                Ok(()) => FALLBACK.with(|fallback| fallback.remove(key)),
                Err(e) => {
                    log::warn!("Failed to persist '{}', kept in memory: {:?}", key, e);
                    FALLBACK.with(|fallback| fallback.set(key, value));
                }
            },
            None => {
                log::warn!("localStorage unavailable, '{}' kept in memory", key);
                FALLBACK.with(|fallback| fallback.set(key, value));
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
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
}

/// A boolean preference bound to one storage key.
///
/// The current value lives in memory: `restore` seeds it from the store,
/// `toggle` flips it and writes it back. A store that loses writes never
/// pins the flag.
#[derive(Debug)]
pub struct PersistedFlag<S> {
    key: PreferenceKey,
    store: S,
    value: Cell<bool>,
}

impl<S: KeyValueStore> PersistedFlag<S> {
    pub fn new(key: PreferenceKey, store: S) -> Self {
        Self {
            key,
            store,
            value: Cell::new(false),
        }
    }

    /// Load the stored value, `false` when absent or unreadable.
    pub fn restore(&self) -> bool {
        let value = decode_bool(self.store.get(self.key.as_str()).as_deref());
        self.value.set(value);
        value
    }

    fn save(&self, value: bool) {
        self.store.set(self.key.as_str(), encode_bool(value));
    }

    /// Flip the current value, persist it and return it.
    pub fn toggle(&self) -> bool {
        let next = !self.value.get();
        self.value.set(next);
        self.save(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_flag_restores_false() {
        let flag = PersistedFlag::new(PreferenceKey::DarkMode, MemoryStore::default());
        assert!(!flag.restore());
    }

    #[test]
    fn toggle_writes_string_booleans() {
        let store = MemoryStore::default();
        let flag = PersistedFlag::new(PreferenceKey::SidebarCollapsed, store.clone());

        assert!(flag.toggle());
        assert_eq!(store.get("sidebarCollapsed").as_deref(), Some("true"));
        assert!(!flag.toggle());
        assert_eq!(store.get("sidebarCollapsed").as_deref(), Some("false"));
    }

    #[test]
    fn flags_are_independent() {
        let store = MemoryStore::default();
        let dark = PersistedFlag::new(PreferenceKey::DarkMode, store.clone());
        let sidebar = PersistedFlag::new(PreferenceKey::SidebarCollapsed, store.clone());

        dark.toggle();
        assert!(dark.restore());
        assert!(!sidebar.restore());
        assert_eq!(store.get("sidebarCollapsed"), None);
    }

    #[test]
    fn garbage_value_reads_false_and_toggles_to_true() {
        let store = MemoryStore::default();
        store.set("darkMode", "yes");
        let flag = PersistedFlag::new(PreferenceKey::DarkMode, store);
        assert!(!flag.restore());
        assert!(flag.toggle());
    }

    #[test]
    fn restore_seeds_the_current_value() {
        let store = MemoryStore::default();
        store.set("darkMode", "true");
        let flag = PersistedFlag::new(PreferenceKey::DarkMode, store);

        assert!(flag.restore());
        assert!(!flag.toggle());
        assert!(flag.toggle());
    }

    #[test]
    fn toggle_keeps_alternating_when_writes_are_lost() {
        let flag = PersistedFlag::new(PreferenceKey::DarkMode, testing::DroppingStore);
        flag.restore();

        let states: Vec<bool> = (0..3).map(|_| flag.toggle()).collect();
        assert_eq!(states, vec![true, false, true]);
    }
}
