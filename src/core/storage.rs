#[cfg(test)]
use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read '{key}': {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// String key/value persistence, backed by browser `localStorage` on the web.
/// Callers treat every error as "value absent".
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store for host tests.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read a key, collapsing any storage failure into `None`.
pub fn read_or_absent<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(v) => v,
        Err(e) => {
            log::debug!("[storage] {}", e);
            None
        }
    }
}

/// Write a key, logging instead of surfacing failures.
pub fn write_best_effort<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::warn!("[storage] {}", e);
    }
}

/// On/off preference stored as "1"/"0". Anything else reads as off.
pub fn read_flag<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> bool {
    read_or_absent(store, key).as_deref() == Some("1")
}

pub fn write_flag<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, on: bool) {
    write_best_effort(store, key, if on { "1" } else { "0" });
}
