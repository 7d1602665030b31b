use serde::{Deserialize, Serialize};

use campus_core::{DomainError, DomainResult};

use crate::Role;

/// The persisted record describing a signed-in user.
///
/// # Invariants
/// - `institution` and `subjects` are present iff `role == Teacher` and the
///   identity came from the signup path that collects them.
/// - For `Student` they are always absent.
///
/// Serialized with camelCase field names; absent optionals are omitted, not
/// written as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub email: String,
    pub display_name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<String>,
}

impl Identity {
    pub fn student(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            display_name: display_name.into(),
            role: Role::Student,
            institution: None,
            subjects: None,
        }
    }

    /// Teacher identity without profile fields (the login path collects none).
    pub fn teacher(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            display_name: display_name.into(),
            role: Role::Teacher,
            institution: None,
            subjects: None,
        }
    }

    /// Teacher identity from the signup path, which collects both profile fields.
    pub fn teacher_with_profile(
        email: impl Into<String>,
        display_name: impl Into<String>,
        institution: impl Into<String>,
        subjects: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            display_name: display_name.into(),
            role: Role::Teacher,
            institution: Some(institution.into()),
            subjects: Some(subjects.into()),
        }
    }

    /// Check the role/profile invariant.
    pub fn validate(&self) -> DomainResult<()> {
        if self.role == Role::Student && (self.institution.is_some() || self.subjects.is_some()) {
            return Err(DomainError::invariant(
                "student identity cannot carry teacher profile fields",
            ));
        }
        Ok(())
    }
}
