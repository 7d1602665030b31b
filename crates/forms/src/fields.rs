use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A credential form field.
///
/// Which fields exist and are required depends on the form shape
/// (see [`crate::FormShape`]); the enum itself is the full union.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    FullName,
    Institution,
    Subjects,
    Role,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm_password",
            Field::FullName => "full_name",
            Field::Institution => "institution",
            Field::Subjects => "subjects",
            Field::Role => "role",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field error messages.
///
/// One human-readable message per field; after a submit attempt every
/// currently-failing field is present at once, not just the first.
pub type FieldErrors = BTreeMap<Field, String>;
