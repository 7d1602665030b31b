use core::str::FromStr;

use serde::{Deserialize, Serialize};

use campus_core::DomainError;

/// Role of an authenticated user.
///
/// The role decides which signup fields are collected and which dashboard a
/// session lands on. There is no guest variant; an absent session means
/// unauthenticated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        }
    }

    /// Default landing route for the role.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Student => "/student/dashboard",
            Role::Teacher => "/teacher/dashboard",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            other => Err(DomainError::validation(format!("unknown role '{other}'"))),
        }
    }
}
