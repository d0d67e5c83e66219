use crate::constant::{CURRENT_PASSWORD_REQUIRED_MSG, PASSWORD_MISMATCH_MSG, USERNAME_REQUIRED_MSG};
use crate::domain::{check_new_password, FormField, FormInput};
use secrecy::ExposeSecret;

/// Per-field outcome of the last validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    username: Option<&'static str>,
    current_password: Option<&'static str>,
    new_password: Option<&'static str>,
    confirm_password: Option<&'static str>,
}

impl ValidationErrors {
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        match field {
            FormField::Username => self.username,
            FormField::CurrentPassword => self.current_password,
            FormField::NewPassword => self.new_password,
            FormField::ConfirmPassword => self.confirm_password,
        }
    }

    pub fn is_valid(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_none())
    }
}

/// Check every field of `input` and collect one message per failing field.
///
/// The result is computed from scratch; nothing carries over from a
/// previous run.
pub fn validate(input: &FormInput) -> ValidationErrors {
    let username = input
        .username()
        .is_empty()
        .then_some(USERNAME_REQUIRED_MSG);

    let current_password = input
        .current_password()
        .expose_secret()
        .is_empty()
        .then_some(CURRENT_PASSWORD_REQUIRED_MSG);

    let new_password = check_new_password(input.new_password())
        .err()
        .map(|violation| violation.as_str());

    // Checked even when the new password itself is invalid.
    let confirm_password = (input.new_password().expose_secret()
        != input.confirm_password().expose_secret())
    .then_some(PASSWORD_MISMATCH_MSG);

    ValidationErrors {
        username,
        current_password,
        new_password,
        confirm_password,
    }
}
