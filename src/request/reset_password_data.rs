use crate::domain::FormInput;
use secrecy::ExposeSecret;
use serde::Serialize;

/// JSON body of `POST /submit`.
///
/// The confirmation field never leaves the form.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordData<'a> {
    pub username: &'a str,
    pub current_password: &'a str,
    pub new_password: &'a str,
}

impl<'a> From<&'a FormInput> for ResetPasswordData<'a> {
    fn from(input: &'a FormInput) -> Self {
        Self {
            username: input.username(),
            current_password: input.current_password().expose_secret(),
            new_password: input.new_password().expose_secret(),
        }
    }
}
