//! File-backed durable session store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

use campus_auth::Identity;

use crate::codec;
use crate::store::{SessionStore, SessionStoreError};

/// Durable session store: the two-entry layout serialized as one JSON
/// object in a single file.
///
/// A commit is one file write carrying both entries, so a reader never
/// observes a role without a profile or vice versa. The session survives
/// restarts within the same OS user profile; nothing is synced across
/// profiles or machines.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store backed by `{app_data_dir}/campus/session.json`.
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self {
            path: default_session_path()?,
        })
    }

    /// Store backed by an explicit file path (tests, portable installs).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_entries(&self) -> Option<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!("failed to read session file: {err}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Some(entries),
            Err(err) => {
                tracing::warn!("corrupted session file ({err}), treating session as absent");
                None
            }
        }
    }
}

impl SessionStore for FileSessionStore {
    fn write(&self, identity: &Identity) -> Result<(), SessionStoreError> {
        let entries = codec::encode(identity)?;
        let payload = serde_json::to_string_pretty(&entries)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }

    fn read(&self) -> Option<Identity> {
        self.load_entries().and_then(|entries| codec::decode(&entries))
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionStoreError::Io(err)),
        }
    }
}

/// Resolve the path to the session file: `{app_data_dir}/campus/session.json`.
fn default_session_path() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut home| {
                home.push(".local");
                home.push("share");
                home
            })
        })
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

    let mut path = base;
    path.push("campus");
    path.push("session.json");
    Ok(path)
}
