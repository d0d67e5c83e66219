use std::fmt::{Debug, Formatter};

/// Failures while wiring the application together.
///
/// Anything that goes wrong while a reset request is in flight is a
/// [`SubmitError`](crate::error::SubmitError) instead.
#[derive(thiserror::Error)]
pub enum BizErrorEnum {
    // CONFIGURATION
    #[error("Failed to determine the current directory.")]
    GetCurrentDirError(#[source] std::io::Error),

    #[error("Failed to parse environment variable.")]
    ParseEnvironmentVariableError(String),

    #[error("Failed to build config sources.")]
    BuildConfigSourcesError(#[source] config::ConfigError),

    #[error("Failed to deserialize config file.")]
    DeserializeConfigurationFileError(#[source] config::ConfigError),

    // TELEMETRY
    #[error("Failed to set logger.")]
    SetLoggerError(#[source] tracing_log::log::SetLoggerError),

    #[error("Failed to set subscriber.")]
    SetSubscriberError(#[source] tracing::dispatcher::SetGlobalDefaultError),

    // OTHER
    #[error("Failed to build the http client.")]
    BuildHttpClientError(#[source] reqwest::Error),

    #[error("Unknown form field: {0}")]
    UnknownFormField(String),

    #[error("Failed to talk to the terminal.")]
    TerminalIoError(#[source] std::io::Error),
}

impl Debug for BizErrorEnum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
