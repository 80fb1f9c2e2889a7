use crate::core::{KeyValueStore, StoreError};
use web_sys as web;

/// Browser `localStorage`. Private browsing or disabled storage leaves
/// `inner` empty and every access reports `Unavailable`.
pub struct LocalStore {
    inner: Option<web::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let inner = web::window().and_then(|w| w.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("[storage] localStorage unavailable; progress will not persist");
        }
        Self { inner }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let storage = self.inner.as_ref().ok_or(StoreError::Unavailable)?;
        storage.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.inner.as_ref().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}
