//! Two-entry persisted session layout, shared by every backend.
//!
//! The layout is string key/value: a role entry holding `"student"` or
//! `"teacher"`, and a profile entry holding the JSON-serialized identity.
//! The two entries always travel together; a session where one exists
//! without the other, or where they disagree, is corrupt and decodes to an
//! absent session.

use std::collections::BTreeMap;
use std::str::FromStr;

use campus_auth::{Identity, Role};

pub(crate) const ROLE_KEY: &str = "campus.role";
pub(crate) const PROFILE_KEY: &str = "campus.profile";

/// Entry map written by a commit. Both keys, always.
pub(crate) fn encode(identity: &Identity) -> Result<BTreeMap<String, String>, serde_json::Error> {
    let profile = serde_json::to_string(identity)?;

    let mut entries = BTreeMap::new();
    entries.insert(ROLE_KEY.to_string(), identity.role.as_str().to_string());
    entries.insert(PROFILE_KEY.to_string(), profile);
    Ok(entries)
}

/// Decode the two-entry layout, failing soft on any inconsistency.
pub(crate) fn decode(entries: &BTreeMap<String, String>) -> Option<Identity> {
    let (role_raw, profile_raw) = match (entries.get(ROLE_KEY), entries.get(PROFILE_KEY)) {
        (Some(role), Some(profile)) => (role, profile),
        (None, None) => return None,
        _ => {
            tracing::warn!("partial session layout found, treating session as absent");
            return None;
        }
    };

    let role = match Role::from_str(role_raw) {
        Ok(role) => role,
        Err(err) => {
            tracing::warn!("unreadable session role ({err}), treating session as absent");
            return None;
        }
    };

    let identity: Identity = match serde_json::from_str(profile_raw) {
        Ok(identity) => identity,
        Err(err) => {
            tracing::warn!("unreadable session profile ({err}), treating session as absent");
            return None;
        }
    };

    if identity.role != role {
        tracing::warn!("session role entry disagrees with profile, treating session as absent");
        return None;
    }

    Some(identity)
}
