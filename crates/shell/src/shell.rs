//! Application shell facade.
//!
//! Decisions are computed purely ([`campus_auth::decide`], form
//! validation) and applied effectfully here: the store write on commit,
//! the navigation request on redirect.

use thiserror::Error;

use campus_auth::{Decision, Identity, Role, decide};
use campus_forms::{FieldErrors, FormController};
use campus_session::{SessionStore, SessionStoreError};

use crate::Navigator;

/// A committed sign-in: the stored identity plus where to send the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedSession {
    pub identity: Identity,
    pub redirect_to: String,
}

/// Why a credential submit did not produce a session.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// One message per failing field; the form stays editable.
    #[error("credential validation failed")]
    Invalid(FieldErrors),

    /// The identity validated but could not be persisted.
    #[error("session could not be persisted: {0}")]
    Store(#[from] SessionStoreError),
}

/// Entry point the surrounding pages consume.
///
/// Holds the injected [`SessionStore`] capability; everything else is
/// computed per call.
#[derive(Debug, Clone)]
pub struct Shell<S> {
    store: S,
}

impl<S: SessionStore> Shell<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Gate access to a protected view, reading the live session.
    ///
    /// `None` gates on authentication only; `Some(role)` additionally
    /// requires that role, redirecting a wrong-role session to its own
    /// dashboard.
    pub fn require_role(&self, required: Option<Role>) -> Decision {
        let session = self.store.read();
        decide(session.as_ref(), required)
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.store.read()
    }

    /// Destroy the session entirely. Idempotent; both persisted entries go
    /// together.
    pub fn logout(&self) -> Result<(), SessionStoreError> {
        self.store.clear()
    }

    /// Drive a form submit to completion: validate, persist, compute the
    /// landing route. A rejected submit leaves the store untouched.
    pub fn submit_credentials(
        &self,
        form: &mut FormController,
    ) -> Result<CommittedSession, SubmitError> {
        let identity = form.submit().map_err(SubmitError::Invalid)?;
        self.store.write(&identity)?;
        tracing::info!(role = identity.role.as_str(), "session committed");

        let redirect_to = identity.role.home_path().to_string();
        Ok(CommittedSession {
            identity,
            redirect_to,
        })
    }
}

/// Apply a guard decision through the navigation seam.
///
/// Returns `true` when the caller should render the protected children.
pub fn apply_decision(decision: &Decision, navigator: &impl Navigator) -> bool {
    match decision {
        Decision::Allow => true,
        Decision::RedirectTo(path) => {
            navigator.replace(path);
            false
        }
    }
}
