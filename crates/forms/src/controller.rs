//! Credential form controller.
//!
//! # Invariants
//! - The set of required fields is a pure function of `(mode, role
//!   selection)`; see [`crate::FormShape`].
//! - Error messages are advisory: editing a field clears its message until
//!   the next blur or submit re-evaluates it.
//! - Switching mode discards all field values and errors; nothing entered
//!   in one mode leaks into the other.
//! - A rejected submit is purely local; the form stays editable and can be
//!   resubmitted indefinitely.

use std::collections::BTreeMap;

use campus_auth::{Identity, Role};

use crate::quotes;
use crate::validate;
use crate::{Field, FieldErrors, FormShape, Mode};

/// Lifecycle phase of the form.
///
/// Submission is synchronous today; `Submitting` exists so an async
/// credential backend can be slotted in without reshaping the machine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitting,
    Committed,
    Rejected,
}

/// How the form obtains its role.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum RoleField {
    /// Unified student/teacher variant: the user picks a role.
    Selectable(Option<Role>),
    /// Fixed-role variant: the role is implicit and no role field exists.
    Fixed(Role),
}

/// Per-field validation state machine driving the login/signup form.
///
/// Owns its state exclusively until a successful [`submit`](Self::submit),
/// whose returned identity is what the caller commits to the session store.
#[derive(Debug, Clone)]
pub struct FormController {
    mode: Mode,
    role: RoleField,
    fields: BTreeMap<Field, String>,
    errors: FieldErrors,
    phase: Phase,
    quote_index: usize,
}

impl FormController {
    /// Unified variant: the form carries a student/teacher role choice.
    pub fn unified(mode: Mode) -> Self {
        Self::new(mode, RoleField::Selectable(None))
    }

    /// Fixed-role variant: the role is implicit (e.g. a teacher-only page),
    /// so no role field is rendered or required.
    pub fn with_fixed_role(mode: Mode, role: Role) -> Self {
        Self::new(mode, RoleField::Fixed(role))
    }

    fn new(mode: Mode, role: RoleField) -> Self {
        Self {
            mode,
            role,
            fields: BTreeMap::new(),
            errors: FieldErrors::new(),
            phase: Phase::Editing,
            quote_index: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Current value of a field (empty string if never edited).
    pub fn value(&self, field: Field) -> &str {
        self.fields
            .get(&field)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn role_selection(&self) -> Option<Role> {
        match self.role {
            RoleField::Selectable(selection) => selection,
            RoleField::Fixed(role) => Some(role),
        }
    }

    pub fn shape(&self) -> FormShape {
        FormShape::of(self.mode, self.role_selection())
    }

    /// Whether the field is required under the current shape.
    pub fn is_required(&self, field: Field) -> bool {
        if field == Field::Role && matches!(self.role, RoleField::Fixed(_)) {
            return false;
        }
        self.shape().requires(field)
    }

    /// Display quote for the current rotation position.
    pub fn quote(&self) -> &'static str {
        quotes::QUOTES[self.quote_index]
    }

    /// A field value changed.
    ///
    /// Clears any stale message on the field; requiredness and format are
    /// re-evaluated at the next blur or submit. The password confirmation
    /// is the exception: its match check reacts live to edits of either
    /// password field.
    pub fn field_changed(&mut self, field: Field, value: impl Into<String>) {
        self.fields.insert(field, value.into());
        self.errors.remove(&field);
        self.phase = Phase::Editing;

        if self.mode == Mode::Signup && matches!(field, Field::Password | Field::ConfirmPassword) {
            self.refresh_confirmation();
        }
    }

    /// A field lost focus: validate that single field and set or clear its
    /// message. The only single-field revalidation point outside submit.
    pub fn field_blurred(&mut self, field: Field) {
        match self.validate_one(field) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Record the role choice (unified variant; a no-op for fixed-role forms).
    pub fn select_role(&mut self, role: Role) {
        let RoleField::Selectable(selection) = &mut self.role else {
            return;
        };
        *selection = Some(role);
        self.phase = Phase::Editing;

        // Messages on fields the new shape no longer requires are dropped;
        // their values are kept and re-checked at the next blur or submit.
        let shape = FormShape::of(self.mode, Some(role));
        self.errors.retain(|field, _| shape.requires(*field));
        self.errors.remove(&Field::Role);
    }

    /// Switch between login and signup.
    ///
    /// Intentional non-recoverable reset: all field values and messages are
    /// discarded, and the display quote rotates. Switching to the current
    /// mode is a no-op.
    pub fn switch_mode(&mut self, new_mode: Mode) {
        if new_mode == self.mode {
            return;
        }

        self.mode = new_mode;
        self.fields.clear();
        self.errors.clear();
        self.phase = Phase::Editing;
        self.quote_index = (self.quote_index + 1) % quotes::QUOTES.len();
    }

    /// Validate every required field and, if all pass, produce the identity
    /// to commit.
    ///
    /// On failure every failing field gets its message at once and the form
    /// moves to [`Phase::Rejected`]: still editable, retryable, and with
    /// no effect outside this controller.
    pub fn submit(&mut self) -> Result<Identity, FieldErrors> {
        self.phase = Phase::Submitting;

        let shape = self.shape();
        let mut errors = FieldErrors::new();
        for &field in shape.required_fields() {
            if !self.is_required(field) {
                // Fixed-role variant: the role field does not exist.
                continue;
            }
            if let Some(message) = self.validate_one(field) {
                errors.insert(field, message);
            }
        }

        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "credential submit rejected");
            self.errors = errors.clone();
            self.phase = Phase::Rejected;
            return Err(errors);
        }

        let Some(role) = self.role_selection() else {
            // The role field is required in every selectable shape, so this
            // is only reachable if requiredness and selection fall out of
            // sync; reject rather than panic.
            let mut errors = FieldErrors::new();
            errors.insert(Field::Role, validate::ROLE_REQUIRED.to_string());
            self.errors = errors.clone();
            self.phase = Phase::Rejected;
            return Err(errors);
        };

        let identity = self.build_identity(role);
        self.errors.clear();
        self.phase = Phase::Committed;
        Ok(identity)
    }

    fn validate_one(&self, field: Field) -> Option<String> {
        if !self.is_required(field) {
            return None;
        }

        let value = self.value(field);
        match field {
            Field::Email => validate::email_error(value),
            Field::Password => validate::password_error(value),
            Field::ConfirmPassword => {
                validate::confirm_password_error(value, self.value(Field::Password))
            }
            Field::FullName | Field::Institution | Field::Subjects => {
                validate::required_text_error(field, value)
            }
            Field::Role => match self.role_selection() {
                Some(_) => None,
                None => Some(validate::ROLE_REQUIRED.to_string()),
            },
        }
    }

    /// Live password-confirmation check: an empty confirmation stays quiet
    /// until blur/submit, a non-empty one tracks the password as it is typed.
    fn refresh_confirmation(&mut self) {
        let confirm = self.value(Field::ConfirmPassword);
        if confirm.is_empty() {
            self.errors.remove(&Field::ConfirmPassword);
            return;
        }

        match validate::confirm_password_error(confirm, self.value(Field::Password)) {
            Some(message) => {
                self.errors.insert(Field::ConfirmPassword, message);
            }
            None => {
                self.errors.remove(&Field::ConfirmPassword);
            }
        }
    }

    fn build_identity(&self, role: Role) -> Identity {
        let email = self.value(Field::Email).trim().to_lowercase();

        let display_name = match self.mode {
            Mode::Signup => self.value(Field::FullName).trim().to_string(),
            // Login collects no name; fall back to the email's local part.
            Mode::Login => email.split('@').next().unwrap_or_default().to_string(),
        };

        match (self.mode, role) {
            (Mode::Signup, Role::Teacher) => Identity::teacher_with_profile(
                email,
                display_name,
                self.value(Field::Institution).trim(),
                self.value(Field::Subjects).trim(),
            ),
            (_, Role::Teacher) => Identity::teacher(email, display_name),
            (_, Role::Student) => Identity::student(email, display_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_student_signup() -> FormController {
        let mut form = FormController::unified(Mode::Signup);
        form.select_role(Role::Student);
        form.field_changed(Field::Email, "a@b.com");
        form.field_changed(Field::Password, "Passw0rd!");
        form.field_changed(Field::ConfirmPassword, "Passw0rd!");
        form.field_changed(Field::FullName, "alice");
        form
    }

    #[test]
    fn blur_sets_error_and_edit_clears_it() {
        let mut form = FormController::unified(Mode::Login);

        form.field_changed(Field::Email, "not-an-email");
        form.field_blurred(Field::Email);
        assert!(form.errors().contains_key(&Field::Email));

        // Editing the field clears the stale message immediately.
        form.field_changed(Field::Email, "not-an-email-still");
        assert!(!form.errors().contains_key(&Field::Email));
    }

    #[test]
    fn blur_on_valid_field_clears_previous_error() {
        let mut form = FormController::unified(Mode::Login);

        form.field_blurred(Field::Email);
        assert!(form.errors().contains_key(&Field::Email));

        form.field_changed(Field::Email, "a@b.com");
        form.field_blurred(Field::Email);
        assert!(!form.errors().contains_key(&Field::Email));
    }

    #[test]
    fn confirmation_mismatch_is_flagged_live() {
        let mut form = FormController::unified(Mode::Signup);
        form.select_role(Role::Student);

        form.field_changed(Field::Password, "Passw0rd!");
        form.field_changed(Field::ConfirmPassword, "Passw0rd!");
        assert!(!form.errors().contains_key(&Field::ConfirmPassword));

        // Editing the *password* re-flags the confirmation without a blur.
        form.field_changed(Field::Password, "Changed1!");
        assert!(form.errors().contains_key(&Field::ConfirmPassword));

        form.field_changed(Field::ConfirmPassword, "Changed1!");
        assert!(!form.errors().contains_key(&Field::ConfirmPassword));
    }

    #[test]
    fn switching_mode_discards_values_and_errors() {
        let mut form = FormController::unified(Mode::Signup);
        form.field_changed(Field::Email, "half-typed");
        form.field_blurred(Field::Email);
        assert!(form.errors().contains_key(&Field::Email));

        form.switch_mode(Mode::Login);

        assert_eq!(form.value(Field::Email), "");
        assert!(form.errors().is_empty());
        assert_eq!(form.mode(), Mode::Login);
    }

    #[test]
    fn switching_mode_rotates_the_quote() {
        let mut form = FormController::unified(Mode::Login);
        let before = form.quote();

        form.switch_mode(Mode::Signup);
        assert_ne!(form.quote(), before);

        // Switching to the current mode is a no-op.
        let current = form.quote();
        form.switch_mode(Mode::Signup);
        assert_eq!(form.quote(), current);
    }

    #[test]
    fn submit_reports_every_failing_field_at_once() {
        let mut form = FormController::unified(Mode::Signup);

        let errors = form.submit().unwrap_err();

        assert!(errors.contains_key(&Field::Email));
        assert!(errors.contains_key(&Field::Password));
        assert!(errors.contains_key(&Field::ConfirmPassword));
        assert!(errors.contains_key(&Field::FullName));
        assert!(errors.contains_key(&Field::Role));
        assert_eq!(form.phase(), Phase::Rejected);
    }

    #[test]
    fn login_submit_validates_all_required_fields() {
        let mut form = FormController::unified(Mode::Login);
        form.field_changed(Field::Email, "a@b.com");

        let errors = form.submit().unwrap_err();
        assert!(!errors.contains_key(&Field::Email));
        assert!(errors.contains_key(&Field::Password));
        assert!(errors.contains_key(&Field::Role));
    }

    #[test]
    fn rejected_submit_can_be_retried() {
        let mut form = filled_student_signup();
        form.field_changed(Field::Password, "abc123");
        form.field_changed(Field::ConfirmPassword, "abc123");

        assert!(form.submit().is_err());
        assert_eq!(form.phase(), Phase::Rejected);

        form.field_changed(Field::Password, "abc123!");
        form.field_changed(Field::ConfirmPassword, "abc123!");
        assert!(form.submit().is_ok());
        assert_eq!(form.phase(), Phase::Committed);
    }

    #[test]
    fn student_signup_commits_identity_without_profile_fields() {
        let mut form = filled_student_signup();

        let identity = form.submit().unwrap();

        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.display_name, "alice");
        assert_eq!(identity.role, Role::Student);
        assert!(identity.institution.is_none());
        assert!(identity.subjects.is_none());
        assert_eq!(form.phase(), Phase::Committed);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn teacher_signup_requires_institution() {
        let mut form = FormController::unified(Mode::Signup);
        form.select_role(Role::Teacher);
        form.field_changed(Field::Email, "t@school.edu");
        form.field_changed(Field::Password, "Passw0rd!");
        form.field_changed(Field::ConfirmPassword, "Passw0rd!");
        form.field_changed(Field::FullName, "Prof. T");
        form.field_changed(Field::Subjects, "Physics");

        let errors = form.submit().unwrap_err();

        assert!(errors.contains_key(&Field::Institution));
        assert!(!errors.contains_key(&Field::Subjects));
        assert_eq!(form.phase(), Phase::Rejected);
    }

    #[test]
    fn teacher_signup_commits_profile_fields() {
        let mut form = FormController::unified(Mode::Signup);
        form.select_role(Role::Teacher);
        form.field_changed(Field::Email, "t@school.edu");
        form.field_changed(Field::Password, "Passw0rd!");
        form.field_changed(Field::ConfirmPassword, "Passw0rd!");
        form.field_changed(Field::FullName, "Prof. T");
        form.field_changed(Field::Institution, "Hillview High");
        form.field_changed(Field::Subjects, "Physics");

        let identity = form.submit().unwrap();

        assert_eq!(identity.role, Role::Teacher);
        assert_eq!(identity.institution.as_deref(), Some("Hillview High"));
        assert_eq!(identity.subjects.as_deref(), Some("Physics"));
    }

    #[test]
    fn teacher_login_commits_identity_without_profile_fields() {
        let mut form = FormController::unified(Mode::Login);
        form.select_role(Role::Teacher);
        form.field_changed(Field::Email, "t@school.edu");
        form.field_changed(Field::Password, "Passw0rd!");

        let identity = form.submit().unwrap();

        assert_eq!(identity.role, Role::Teacher);
        assert!(identity.institution.is_none());
        assert!(identity.subjects.is_none());
        // No name collected on login; the email's local part stands in.
        assert_eq!(identity.display_name, "t");
    }

    #[test]
    fn fixed_role_form_needs_no_role_selection() {
        let mut form = FormController::with_fixed_role(Mode::Login, Role::Teacher);
        form.field_changed(Field::Email, "t@school.edu");
        form.field_changed(Field::Password, "Passw0rd!");

        let identity = form.submit().unwrap();
        assert_eq!(identity.role, Role::Teacher);
    }

    #[test]
    fn fixed_role_form_ignores_role_selection_calls() {
        let mut form = FormController::with_fixed_role(Mode::Login, Role::Teacher);
        form.select_role(Role::Student);
        assert_eq!(form.role_selection(), Some(Role::Teacher));
    }

    #[test]
    fn changing_role_drops_errors_on_fields_no_longer_required() {
        let mut form = FormController::unified(Mode::Signup);
        form.select_role(Role::Teacher);
        form.field_blurred(Field::Institution);
        assert!(form.errors().contains_key(&Field::Institution));

        form.select_role(Role::Student);
        assert!(!form.errors().contains_key(&Field::Institution));
    }

    #[test]
    fn committed_email_is_trimmed_and_lowercased() {
        let mut form = filled_student_signup();
        form.field_changed(Field::Email, "  Alice@B.COM ");

        let identity = form.submit().unwrap();
        assert_eq!(identity.email, "alice@b.com");
    }
}
