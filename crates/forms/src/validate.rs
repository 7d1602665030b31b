//! Per-field validation rules.
//!
//! Each rule produces at most one human-readable message; `None` means the
//! value is acceptable for that field.

use crate::Field;

/// Symbols a password must draw from (at least one).
pub const PASSWORD_SYMBOLS: &[char] = &['@', '$', '!', '%', '*', '#', '?', '&'];

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

pub(crate) const ROLE_REQUIRED: &str = "Please choose a role";

pub fn email_error(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Email is required".to_string());
    }
    if !is_valid_email(value) {
        return Some("Enter a valid email address".to_string());
    }
    None
}

/// `local@domain.tld` shape: at least one character before the `@`, a
/// domain with a dot-separated suffix after it, no whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let Some((host, suffix)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !suffix.is_empty()
}

pub fn password_error(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Password is required".to_string());
    }
    if !is_strong_password(value) {
        return Some(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters and include a letter, a number, and a symbol (@$!%*#?&)"
        ));
    }
    None
}

fn is_strong_password(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LEN
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SYMBOLS.contains(&c))
}

pub fn confirm_password_error(value: &str, password: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Please confirm your password".to_string());
    }
    if value != password {
        return Some("Passwords do not match".to_string());
    }
    None
}

/// Plain required-text fields: non-blank after trimming.
pub fn required_text_error(field: Field, value: &str) -> Option<String> {
    if !value.trim().is_empty() {
        return None;
    }

    let message = match field {
        Field::FullName => "Full name is required",
        Field::Institution => "Institution is required",
        Field::Subjects => "Subjects are required",
        _ => "This field is required",
    };
    Some(message.to_string())
}
