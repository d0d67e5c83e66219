mod form_input;
mod new_password;
mod validation_errors;

pub use form_input::{FormField, FormInput};
pub use new_password::{check_new_password, PasswordViolation};
pub use validation_errors::{validate, ValidationErrors};
