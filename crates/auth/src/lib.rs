//! `campus-auth` — pure identity/role/guard boundary.
//!
//! This crate is intentionally decoupled from storage and UI.

pub mod guard;
pub mod identity;
pub mod roles;

pub use guard::{Decision, LOGIN_PATH, decide};
pub use identity::Identity;
pub use roles::Role;
