use crate::constant::{
    MIN_PASSWORD_LENGTH, NEW_PASSWORD_REQUIRED_MSG, PASSWORD_RULE_MSG,
    PASSWORD_SPECIAL_CHARACTERS,
};
use secrecy::{ExposeSecret, Secret};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordViolation {
    IsEmpty,
    TooShort,
    MissingLetter,
    MissingDigit,
    MissingSpecialCharacter,
    ContainsForbiddenCharacter,
}

impl PasswordViolation {
    /// Every rule violation shares the same composite message; only an empty
    /// field gets its own.
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordViolation::IsEmpty => NEW_PASSWORD_REQUIRED_MSG,
            PasswordViolation::TooShort
            | PasswordViolation::MissingLetter
            | PasswordViolation::MissingDigit
            | PasswordViolation::MissingSpecialCharacter
            | PasswordViolation::ContainsForbiddenCharacter => PASSWORD_RULE_MSG,
        }
    }
}

/// Checks a new password against the strength rule: at least six
/// characters long, an ASCII letter, an ASCII digit and one of `!@#$%^&*`,
/// and nothing else.
pub fn check_new_password(password: &Secret<String>) -> Result<(), PasswordViolation> {
    let candidate = password.expose_secret();
    if candidate.is_empty() {
        return Err(PasswordViolation::IsEmpty);
    }

    if candidate
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && !is_special_character(c))
    {
        return Err(PasswordViolation::ContainsForbiddenCharacter);
    }

    // Only ASCII past this point, so bytes and characters agree.
    if candidate.len() < MIN_PASSWORD_LENGTH {
        return Err(PasswordViolation::TooShort);
    }

    if !candidate.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(PasswordViolation::MissingLetter);
    }

    if !candidate.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordViolation::MissingDigit);
    }

    if !candidate.chars().any(is_special_character) {
        return Err(PasswordViolation::MissingSpecialCharacter);
    }

    Ok(())
}

fn is_special_character(c: char) -> bool {
    PASSWORD_SPECIAL_CHARACTERS.contains(&c)
}
