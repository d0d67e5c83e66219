use crate::constant::{
    CONFIRM_PASSWORD_FIELD, CURRENT_PASSWORD_FIELD, NEW_PASSWORD_FIELD, USERNAME_FIELD,
};
use crate::error::BizErrorEnum;
use secrecy::{ExposeSecret, Secret};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Username,
    CurrentPassword,
    NewPassword,
    ConfirmPassword,
}

impl FormField {
    /// Fields in the order they are laid out on the form.
    pub const ALL: [FormField; 4] = [
        FormField::Username,
        FormField::CurrentPassword,
        FormField::NewPassword,
        FormField::ConfirmPassword,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Username => USERNAME_FIELD,
            FormField::CurrentPassword => CURRENT_PASSWORD_FIELD,
            FormField::NewPassword => NEW_PASSWORD_FIELD,
            FormField::ConfirmPassword => CONFIRM_PASSWORD_FIELD,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Username => "Username",
            FormField::CurrentPassword => "Current Password",
            FormField::NewPassword => "New Password",
            FormField::ConfirmPassword => "Confirm New Password",
        }
    }

    pub fn is_secret(&self) -> bool {
        !matches!(self, FormField::Username)
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = BizErrorEnum;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            USERNAME_FIELD => Ok(FormField::Username),
            CURRENT_PASSWORD_FIELD => Ok(FormField::CurrentPassword),
            NEW_PASSWORD_FIELD => Ok(FormField::NewPassword),
            CONFIRM_PASSWORD_FIELD => Ok(FormField::ConfirmPassword),
            other => Err(BizErrorEnum::UnknownFormField(other.to_string())),
        }
    }
}

/// The values the user has typed so far.
///
/// Values are stored exactly as entered: no trimming, no case folding.
#[derive(Debug, Clone)]
pub struct FormInput {
    username: String,
    current_password: Secret<String>,
    new_password: Secret<String>,
    confirm_password: Secret<String>,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            username: String::new(),
            current_password: Secret::new(String::new()),
            new_password: Secret::new(String::new()),
            confirm_password: Secret::new(String::new()),
        }
    }
}

impl FormInput {
    pub fn new(
        username: impl Into<String>,
        current_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            current_password: Secret::new(current_password.into()),
            new_password: Secret::new(new_password.into()),
            confirm_password: Secret::new(confirm_password.into()),
        }
    }

    /// Replace a single field, leaving the others untouched.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Username => self.username = value,
            FormField::CurrentPassword => self.current_password = Secret::new(value),
            FormField::NewPassword => self.new_password = Secret::new(value),
            FormField::ConfirmPassword => self.confirm_password = Secret::new(value),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Username => &self.username,
            FormField::CurrentPassword => self.current_password.expose_secret(),
            FormField::NewPassword => self.new_password.expose_secret(),
            FormField::ConfirmPassword => self.confirm_password.expose_secret(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn current_password(&self) -> &Secret<String> {
        &self.current_password
    }

    pub fn new_password(&self) -> &Secret<String> {
        &self.new_password
    }

    pub fn confirm_password(&self) -> &Secret<String> {
        &self.confirm_password
    }
}
