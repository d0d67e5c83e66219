mod form;
mod phase;
mod timers;

pub use form::PasswordResetForm;
pub use phase::{SubmissionPhase, SubmitOutcome};
pub use timers::Timers;
