use crate::constant::SUBMIT_PATH;
use crate::domain::FormInput;
use crate::error::{BizErrorEnum, SubmitError};
use crate::request::{ErrorData, ResetPasswordData};
use anyhow::Context;
use reqwest::{Client, Url};

/// Talks to the remote password reset endpoint.
///
/// No client-side timeout is configured and nothing is retried: a request
/// lives as long as the network stack lets it.
#[derive(Debug)]
pub struct ResetClient {
    http_client: Client,
    base_url: String,
}

impl ResetClient {
    pub fn new(base_url: String) -> Result<Self, BizErrorEnum> {
        let http_client = Client::builder().build().map_err(|e| {
            tracing::error!("Failed to build http client: {:?}", e);
            BizErrorEnum::BuildHttpClientError(e)
        })?;
        Ok(ResetClient {
            http_client,
            base_url,
        })
    }

    /// `{base_url}/submit`, tolerating a trailing slash on the base.
    ///
    /// `Url::join` would drop any path prefix carried by the base url,
    /// so the path is appended textually.
    fn submit_url(&self) -> Result<Url, SubmitError> {
        let raw = format!("{}{}", self.base_url.trim_end_matches('/'), SUBMIT_PATH);
        let url = Url::parse(&raw)
            .with_context(|| format!("Failed to parse reset url: {}", raw))
            .map_err(|e| {
                tracing::error!("{:?}", e);
                SubmitError::Unexpected(e)
            })?;
        Ok(url)
    }

    /// POST the username and both passwords. Any 2xx counts as success and
    /// the response body is ignored.
    #[tracing::instrument(
        name = "Submit password reset",
        skip(self, input),
        fields(username = %input.username())
    )]
    pub async fn submit_reset(&self, input: &FormInput) -> Result<(), SubmitError> {
        let url = self.submit_url()?;
        let request_body = ResetPasswordData::from(input);

        let response = self
            .http_client
            .post(url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send reset request: {:?}", e);
                classify_send_error(e)
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(%status, "Reset request accepted");
            return Ok(());
        }

        // The server did answer; an unreadable body only costs us the message.
        let body = response.bytes().await.unwrap_or_default();
        let message = ErrorData::message_from(&body);
        tracing::warn!(%status, ?message, "Reset request rejected");
        Err(SubmitError::Rejected { status, message })
    }
}

/// Requests that never got off the ground are unexpected; everything else
/// failed on the wire and never produced a response.
fn classify_send_error(e: reqwest::Error) -> SubmitError {
    if e.is_builder() || e.is_redirect() {
        SubmitError::Unexpected(anyhow::Error::new(e).context("Failed to build reset request"))
    } else {
        SubmitError::Unreachable(e)
    }
}
