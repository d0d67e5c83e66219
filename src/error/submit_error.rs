use crate::constant::{SERVER_ERROR_FALLBACK_MSG, SERVER_UNAVAILABLE_MSG, UNEXPECTED_ERROR_MSG};
use reqwest::StatusCode;
use std::fmt::{Debug, Formatter};

/// Why a reset request did not succeed.
///
/// Every variant is terminal for the current attempt; the user can resubmit.
#[derive(thiserror::Error)]
pub enum SubmitError {
    /// The server answered, but not with a 2xx.
    #[error("The server rejected the reset request with status {status}.")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },

    /// The request went out but no response came back.
    #[error("No response was received from the server.")]
    Unreachable(#[source] reqwest::Error),

    /// The request could not be built or sent at all.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl SubmitError {
    /// The text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            SubmitError::Rejected { message: None, .. } => SERVER_ERROR_FALLBACK_MSG.into(),
            SubmitError::Unreachable(_) => SERVER_UNAVAILABLE_MSG.into(),
            SubmitError::Unexpected(_) => UNEXPECTED_ERROR_MSG.into(),
        }
    }
}

// We are still using a bespoke implementation of `Debug`
// to get a nice report using the error source chain
impl Debug for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
