use std::collections::BTreeMap;
use std::sync::RwLock;

use campus_auth::Identity;

use crate::codec;
use crate::store::{SessionStore, SessionStoreError};

/// In-memory session store.
///
/// Intended for tests and non-durable embeddings; same two-entry layout as
/// the durable backend.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn write(&self, identity: &Identity) -> Result<(), SessionStoreError> {
        let entries = codec::encode(identity)?;

        let mut guard = self
            .entries
            .write()
            .map_err(|_| SessionStoreError::Unavailable("lock poisoned".to_string()))?;
        *guard = entries;
        Ok(())
    }

    fn read(&self) -> Option<Identity> {
        let guard = self.entries.read().ok()?;
        codec::decode(&guard)
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let mut guard = self
            .entries
            .write()
            .map_err(|_| SessionStoreError::Unavailable("lock poisoned".to_string()))?;
        guard.clear();
        Ok(())
    }
}
