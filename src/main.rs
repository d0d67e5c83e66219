use anyhow::Context;
use password_reset_form::configuration;
use password_reset_form::domain::FormField;
use password_reset_form::error::BizErrorEnum;
use password_reset_form::navigator::ChannelNavigator;
use password_reset_form::telemetry;
use password_reset_form::workflow::{PasswordResetForm, SubmitOutcome};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Typed alone on a line, empties the field.
const CLEAR_ENTRY: &str = "-";

/// What a line typed at a field prompt does to that field.
#[derive(Debug, PartialEq, Eq)]
enum Entry {
    Keep,
    Clear,
    Set(String),
}

impl Entry {
    fn from_line(line: String) -> Self {
        if line.is_empty() {
            Entry::Keep
        } else if line == CLEAR_ENTRY {
            Entry::Clear
        } else {
            Entry::Set(line)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::get_subscriber(
        "password-reset-form".into(),
        "info".into(),
        std::io::stderr,
    );
    telemetry::init_subscriber(subscriber)?;

    let config = configuration::get_configuration().context("Failed to read configuration")?;
    tracing::info!(
        application = %config.application.name,
        base_url = %config.reset_api.base_url,
        "Reset API configured"
    );

    let (navigator, mut navigations) = ChannelNavigator::channel();
    let form = PasswordResetForm::new(
        config.reset_api.client()?,
        Arc::new(navigator),
        config.redirect,
        config.timings,
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!(
        "Reset Password (press enter to keep a field's current value, type {} to clear it)",
        CLEAR_ENTRY
    );
    loop {
        for field in FormField::ALL {
            print!("{}: ", field.label());
            std::io::stdout()
                .flush()
                .map_err(BizErrorEnum::TerminalIoError)?;
            let line = match lines
                .next_line()
                .await
                .map_err(BizErrorEnum::TerminalIoError)?
            {
                Some(line) => line,
                // stdin closed
                None => return Ok(()),
            };
            match Entry::from_line(line) {
                Entry::Keep => {}
                Entry::Clear => form.set_field(field, ""),
                Entry::Set(value) => form.set_field(field, value),
            }
        }

        let mut phases = form.subscribe();
        match form.submit().await {
            SubmitOutcome::Accepted => {
                println!("{}", form.view());
                phases
                    .wait_for(|phase| phase.is_terminal())
                    .await
                    .context("Form dropped before the reset was confirmed")?;
                println!("{}", form.view());

                // The app link, then the web fallback.
                for _ in 0..2 {
                    match navigations.recv().await {
                        Some(url) => println!("Opening {}", url),
                        None => break,
                    }
                }
                break;
            }
            SubmitOutcome::Invalid(_) | SubmitOutcome::Failed(_) => {
                println!("{}", form.view());
            }
            SubmitOutcome::InFlight | SubmitOutcome::Closed => break,
        }
    }

    form.teardown();
    Ok(())
}
