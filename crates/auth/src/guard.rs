//! Route access guard.
//!
//! Pure decision logic:
//! - No IO
//! - No panics
//! - No navigation side effects (applying a decision is the caller's job)

use crate::{Identity, Role};

/// Where an unauthenticated visitor is sent.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of evaluating access to a protected view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Render the protected view.
    Allow,
    /// Navigate to the given path, replacing the current history entry.
    RedirectTo(String),
}

impl Decision {
    pub fn is_allow(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Decide whether the current session may enter a view.
///
/// An authenticated session with the wrong role is sent to its *own*
/// dashboard, never back to login; the redirect target is derived from the
/// actual role, not the required one.
pub fn decide(session: Option<&Identity>, required: Option<Role>) -> Decision {
    let Some(identity) = session else {
        return Decision::RedirectTo(LOGIN_PATH.to_string());
    };

    match required {
        Some(role) if identity.role != role => {
            Decision::RedirectTo(identity.role.home_path().to_string())
        }
        _ => Decision::Allow,
    }
}
