use serde_json::Value;
use thiserror::Error;

/// Keys the CMS uses for human readable error text, most specific first.
const MESSAGE_KEYS: [&str; 3] = ["detail", "error", "message"];

/// The applications endpoint only reports through these two.
const APPLICATION_MESSAGE_KEYS: [&str; 2] = ["detail", "error"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CmsError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("resource not found")]
    NotFound,

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("could not build request: {0}")]
    Serialize(String),
}

impl CmsError {
    /// Message sent back by the server with a non-2xx response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            CmsError::Status { message: Some(message), .. } => Some(message.as_str()),
            _ => None,
        }
    }
}

fn first_message(body: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        body.get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    })
}

/// Pulls an error message out of a JSON error body.
///
/// `detail` wins over `error`, which wins over `message`. A bare JSON string
/// body is used as-is.
pub fn message_from_body(body: &Value) -> Option<String> {
    if let Value::String(text) = body {
        let text = text.trim();
        return (!text.is_empty()).then(|| text.to_string());
    }
    first_message(body, &MESSAGE_KEYS)
}

/// Message shown to an applicant: `detail`, else `error`. Anything else
/// leaves the generic rejection text in place.
pub fn application_message_from_body(body: &Value) -> Option<String> {
    first_message(body, &APPLICATION_MESSAGE_KEYS)
}
