mod error_data;
mod reset_password_data;

pub use error_data::ErrorData;
pub use reset_password_data::ResetPasswordData;
