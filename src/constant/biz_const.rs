/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// validate new password
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const PASSWORD_SPECIAL_CHARACTERS: [char; 8] = ['!', '@', '#', '$', '%', '^', '&', '*'];

/// form field names, as submitted on the wire
pub const USERNAME_FIELD: &str = "username";
pub const CURRENT_PASSWORD_FIELD: &str = "currentPassword";
pub const NEW_PASSWORD_FIELD: &str = "newPassword";
pub const CONFIRM_PASSWORD_FIELD: &str = "confirmPassword";

/// reset endpoint, relative to the configured base url
pub const SUBMIT_PATH: &str = "/submit";

/// validation messages
pub const USERNAME_REQUIRED_MSG: &str = "Username is required.";
pub const CURRENT_PASSWORD_REQUIRED_MSG: &str = "Current password is required.";
pub const NEW_PASSWORD_REQUIRED_MSG: &str = "New password is required.";
pub const PASSWORD_RULE_MSG: &str = "Password must be at least 6 characters long, contain at least one letter, one number, and one special character.";
pub const PASSWORD_MISMATCH_MSG: &str = "Passwords do not match.";

/// submission messages
pub const RESET_SUCCESS_MSG: &str = "Password reset successful. Redirecting...";
pub const SERVER_ERROR_FALLBACK_MSG: &str = "Something went wrong. Please try again.";
pub const SERVER_UNAVAILABLE_MSG: &str =
    "Server unavailable. Please check your internet connection and try again.";
pub const UNEXPECTED_ERROR_MSG: &str = "An unexpected error occurred. Please try again.";

/// submit control labels
pub const SUBMIT_LABEL: &str = "Reset Password";
pub const LOADING_LABEL: &str = "...";
