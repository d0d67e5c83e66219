use crate::configuration::{RedirectSettings, TimingSettings};
use crate::constant::RESET_SUCCESS_MSG;
use crate::domain::{validate, FormField, FormInput, ValidationErrors};
use crate::navigator::Navigator;
use crate::reset_client::ResetClient;
use crate::view::FormView;
use crate::workflow::{SubmissionPhase, SubmitOutcome, Timers};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// The password reset form: field values, the outcome of the last
/// validation run, and the phase of the current submission.
///
/// Dropping the form (or calling [`PasswordResetForm::teardown`]) cancels
/// the delayed success reveal and the redirect sequence.
pub struct PasswordResetForm {
    fields: Mutex<FieldState>,
    phase: Arc<watch::Sender<SubmissionPhase>>,
    client: ResetClient,
    navigator: Arc<dyn Navigator>,
    redirect: RedirectSettings,
    timings: TimingSettings,
    timers: Timers,
}

#[derive(Debug, Default)]
struct FieldState {
    input: FormInput,
    errors: ValidationErrors,
}

impl PasswordResetForm {
    pub fn new(
        client: ResetClient,
        navigator: Arc<dyn Navigator>,
        redirect: RedirectSettings,
        timings: TimingSettings,
    ) -> Self {
        let (phase, _) = watch::channel(SubmissionPhase::Idle);
        Self {
            fields: Mutex::new(FieldState::default()),
            phase: Arc::new(phase),
            client,
            navigator,
            redirect,
            timings,
            timers: Timers::default(),
        }
    }

    pub fn set_field(&self, field: FormField, value: impl Into<String>) {
        self.lock_fields().input.set(field, value);
    }

    pub fn input(&self) -> FormInput {
        self.lock_fields().input.clone()
    }

    pub fn errors(&self) -> ValidationErrors {
        self.lock_fields().errors.clone()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase.borrow().clone()
    }

    /// Observe every phase change from now on.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionPhase> {
        self.phase.subscribe()
    }

    pub fn view(&self) -> FormView {
        let fields = self.lock_fields();
        FormView::new(&fields.input, &fields.errors, self.phase())
    }

    /// Validate the form and, if it passes, send the reset request.
    ///
    /// While a request is in flight further calls return
    /// [`SubmitOutcome::InFlight`] without touching the fields or the network.
    #[tracing::instrument(name = "Submit reset form", skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        if self.timers.is_closed() {
            return SubmitOutcome::Closed;
        }

        // Entering `Loading` happens under the field lock, so two concurrent
        // submits cannot both get past this block.
        let input = {
            let mut fields = self.lock_fields();
            if self.phase.borrow().is_loading() {
                tracing::debug!("Submission already in flight, ignoring");
                return SubmitOutcome::InFlight;
            }

            let errors = validate(&fields.input);
            fields.errors = errors.clone();
            if !errors.is_valid() {
                tracing::info!("Form failed validation");
                return SubmitOutcome::Invalid(errors);
            }

            // A redirect left over from an earlier success belongs to that
            // attempt, not this one.
            self.timers.cancel_pending();
            self.phase.send_replace(SubmissionPhase::Loading);
            fields.input.clone()
        };

        match self.client.submit_reset(&input).await {
            Ok(()) => {
                self.schedule_success();
                SubmitOutcome::Accepted
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Password reset failed"
                );
                let message = e.user_message();
                if !self.timers.is_closed() {
                    self.phase
                        .send_replace(SubmissionPhase::Failed(message.clone()));
                }
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Cancel every pending continuation. No phase change or navigation
    /// happens after this returns.
    pub fn teardown(&self) {
        tracing::debug!("Tearing down reset form");
        self.timers.close();
    }

    /// Reveal the success message after the reveal delay, then run the
    /// redirect sequence: app link first, web link after the fallback delay.
    fn schedule_success(&self) {
        let phase = Arc::clone(&self.phase);
        let navigator = Arc::clone(&self.navigator);
        let redirect = self.redirect.clone();
        let timings = self.timings.clone();

        let scheduled = self.timers.spawn(async move {
            tokio::time::sleep(timings.reveal_delay()).await;
            phase.send_replace(SubmissionPhase::Success(RESET_SUCCESS_MSG.into()));

            tokio::time::sleep(timings.redirect_delay()).await;
            navigator.navigate(&redirect.app_link);

            // No way to tell whether the app picked the link up.
            tokio::time::sleep(timings.fallback_delay()).await;
            navigator.navigate(&redirect.web_link);
        });
        if !scheduled {
            tracing::debug!("Form torn down before the reset was confirmed");
        }
    }

    fn lock_fields(&self) -> MutexGuard<'_, FieldState> {
        self.fields.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for PasswordResetForm {
    fn drop(&mut self) {
        self.teardown();
    }
}
