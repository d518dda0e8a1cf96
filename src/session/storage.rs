//! Key-value backends the session store persists into.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

#[cfg(not(target_arch = "wasm32"))]
use std::{collections::BTreeMap, fs, io, path::PathBuf};

use dioxus_logger::tracing;

/// String key-value area that outlives a single view.
///
/// Implementations are infallible from the caller's point of view: a backend that
/// cannot persist logs a warning and behaves as if the entry was never written.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);

    /// Writes several entries before returning.
    fn set_many(&self, entries: &[(&str, &str)]) {
        for (key, value) in entries {
            self.set(key, value);
        }
    }

    /// Removes several entries before returning.
    fn remove_many(&self, keys: &[&str]) {
        for key in keys {
            self.remove(key);
        }
    }
}

/// Process-local storage. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
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

impl SessionStorage for MemoryStorage {
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

/// The browser's `localStorage`, which survives page reloads.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        let storage = web_sys::window()?.local_storage().ok().flatten();
        if storage.is_none() {
            tracing::warn!("localStorage is not available, session will not be persisted");
        }
        storage
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            if let Err(err) = storage.set_item(key, value) {
                tracing::warn!("Failed to write {} to localStorage: {:?}", key, err);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            if let Err(err) = storage.remove_item(key) {
                tracing::warn!("Failed to remove {} from localStorage: {:?}", key, err);
            }
        }
    }
}

/// JSON file on disk, used by the desktop build so a session survives restarts.
///
/// Entries are cached in memory and the whole file is rewritten on every change.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: RefCell<BTreeMap<String, String>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    /// Opens the storage file, starting empty when it is missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                tracing::warn!(
                    "Ignoring corrupt session file {}: {}",
                    path.display(),
                    err
                );
                BTreeMap::new()
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                tracing::warn!("Failed to read session file {}: {}", path.display(), err);
                BTreeMap::new()
            }
        };

        Self {
            path,
            entries: RefCell::new(entries),
        }
    }

    fn persist(&self) {
        let result = serde_json::to_string_pretty(&*self.entries.borrow())
            .map_err(io::Error::from)
            .and_then(|contents| fs::write(&self.path, contents));

        if let Err(err) = result {
            tracing::warn!(
                "Failed to write session file {}: {}",
                self.path.display(),
                err
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.set_many(&[(key, value)]);
    }

    fn remove(&self, key: &str) {
        self.remove_many(&[key]);
    }

    fn set_many(&self, entries: &[(&str, &str)]) {
        {
            let mut stored = self.entries.borrow_mut();
            for (key, value) in entries {
                stored.insert(key.to_string(), value.to_string());
            }
        }
        self.persist();
    }

    fn remove_many(&self, keys: &[&str]) {
        {
            let mut stored = self.entries.borrow_mut();
            for key in keys {
                stored.remove(*key);
            }
        }
        self.persist();
    }
}
