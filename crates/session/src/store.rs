use std::sync::Arc;

use thiserror::Error;

use campus_auth::Identity;

/// Session store operation error.
///
/// Only the write/clear paths are fallible; reads fail soft (see
/// [`SessionStore::read`]).
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("session serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("session storage io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("session storage unavailable: {0}")]
    Unavailable(String),
}

/// Single source of truth for "who is logged in".
///
/// ## Contract
///
/// - `write` replaces any existing identity atomically: the role entry and
///   the profile entry are stored together, never independently.
/// - `read` fails soft: corrupted or partial stored data is treated as an
///   absent session and logged, never surfaced as an error.
/// - `clear` removes both entries together and is idempotent.
///
/// Validation is the caller's job; the store accepts whatever identity the
/// form controller committed.
pub trait SessionStore: Send + Sync {
    /// Replace the persisted identity.
    fn write(&self, identity: &Identity) -> Result<(), SessionStoreError>;

    /// Current persisted identity, or `None` if never set, cleared, or
    /// unreadable.
    fn read(&self) -> Option<Identity>;

    /// Remove the persisted identity entirely. A no-op on an empty store.
    fn clear(&self) -> Result<(), SessionStoreError>;
}

impl<S> SessionStore for Arc<S>
where
    S: SessionStore + ?Sized,
{
    fn write(&self, identity: &Identity) -> Result<(), SessionStoreError> {
        (**self).write(identity)
    }

    fn read(&self) -> Option<Identity> {
        (**self).read()
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        (**self).clear()
    }
}
