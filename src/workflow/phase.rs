use crate::domain::ValidationErrors;

/// Lifecycle of one submit attempt. Exactly one holds at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Loading,
    Success(String),
    Failed(String),
}

impl SubmissionPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionPhase::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionPhase::Success(_) | SubmissionPhase::Failed(_))
    }
}

/// What a call to `submit` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A request is already in flight; nothing was validated or sent.
    InFlight,
    /// Validation failed; nothing was sent.
    Invalid(ValidationErrors),
    /// The server accepted the reset. The success phase and the redirect
    /// follow on their own timers.
    Accepted,
    /// The request failed with the given user-facing message.
    Failed(String),
    /// The form has been torn down.
    Closed,
}
