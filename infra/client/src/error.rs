use crate::message::{CONNECTION_MESSAGE, UNKNOWN_MESSAGE};
use std::borrow::Cow;

/// Errors returned by [`crate::ApiClient`].
#[depot_derive::depot_error]
pub enum ClientError {
    /// `api.base_url` or a joined path is not a valid URL.
    #[error("Invalid URL{}: {source}", format_context(.context))]
    Url { source: url::ParseError, context: Option<Cow<'static, str>> },

    /// The request never produced a response, or its body could not be read.
    #[error("Transport error{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The backend answered with a non-success status.
    #[error("API error {status}{}: {message}", format_context(.context))]
    Api { status: u16, message: String, context: Option<Cow<'static, str>> },

    /// The response body did not match the expected record shape.
    #[error("Unexpected response body{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal client error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ClientError {
    /// Message suitable for a toast or error modal.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Transport { source, .. }
                if source.is_connect() || source.is_timeout() || source.is_request() =>
            {
                CONNECTION_MESSAGE.to_owned()
            },
            Self::Transport { source, .. } => non_empty_or_unknown(source.to_string()),
            Self::Decode { source, .. } => non_empty_or_unknown(source.to_string()),
            Self::Url { source, .. } => non_empty_or_unknown(source.to_string()),
            Self::Internal { message, .. } => non_empty_or_unknown(message.to_string()),
        }
    }

    /// HTTP status for [`ClientError::Api`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn non_empty_or_unknown(text: String) -> String {
    if text.trim().is_empty() { UNKNOWN_MESSAGE.to_owned() } else { text }
}
