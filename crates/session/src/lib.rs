//! `campus-session` — durable "who is logged in" state.
//!
//! A storage trait plus in-memory and file-backed implementations.
//! Components depend on the [`SessionStore`] capability, never on a
//! concrete backend.

mod codec;
pub mod file;
pub mod memory;
pub mod store;

pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;
pub use store::{SessionStore, SessionStoreError};
