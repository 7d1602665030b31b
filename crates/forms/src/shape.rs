use campus_auth::Role;

use crate::Field;

/// View mode of the credential form.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    Login,
    Signup,
}

/// The shape of the form: which fields are required.
///
/// A pure function of `(mode, role selection)`, modeled as a tagged union
/// so each variant carries its own required-field set instead of optional
/// fields and imperative branching.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormShape {
    Login,
    StudentSignup,
    TeacherSignup,
    /// Signup before a role has been picked: the common signup fields plus
    /// the role choice itself are required.
    RoleUnchosen,
}

impl FormShape {
    pub fn of(mode: Mode, role_selection: Option<Role>) -> Self {
        match (mode, role_selection) {
            (Mode::Login, _) => FormShape::Login,
            (Mode::Signup, Some(Role::Student)) => FormShape::StudentSignup,
            (Mode::Signup, Some(Role::Teacher)) => FormShape::TeacherSignup,
            (Mode::Signup, None) => FormShape::RoleUnchosen,
        }
    }

    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            FormShape::Login => &[Field::Email, Field::Password, Field::Role],
            FormShape::StudentSignup | FormShape::RoleUnchosen => &[
                Field::Email,
                Field::Password,
                Field::ConfirmPassword,
                Field::FullName,
                Field::Role,
            ],
            FormShape::TeacherSignup => &[
                Field::Email,
                Field::Password,
                Field::ConfirmPassword,
                Field::FullName,
                Field::Institution,
                Field::Subjects,
                Field::Role,
            ],
        }
    }

    pub fn requires(&self, field: Field) -> bool {
        self.required_fields().contains(&field)
    }
}
