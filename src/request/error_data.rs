use serde::Deserialize;

/// Optional body of a failed reset response.
#[derive(Debug, Deserialize)]
pub struct ErrorData {
    pub message: Option<String>,
}

impl ErrorData {
    /// Extract the server's message from a raw response body.
    ///
    /// Bodies that are not JSON, or whose `message` is absent, blank or not
    /// a string, yield `None`.
    pub fn message_from(body: &[u8]) -> Option<String> {
        serde_json::from_slice::<ErrorData>(body)
            .ok()
            .and_then(|data| data.message)
            .filter(|message| !message.is_empty())
    }
}
