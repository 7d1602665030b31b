//! `campus-shell` — the interface the surrounding pages consume.
//!
//! Wires the session store, access guard, and form controller together:
//! `require_role`, `submit_credentials`, `current_identity`, `logout`, and
//! the navigation seam toward the (out-of-scope) presentational shell.

pub mod navigator;
pub mod shell;

pub use navigator::{Navigator, RecordingNavigator};
pub use shell::{CommittedSession, Shell, SubmitError, apply_decision};
