//! Error categorization.
//!
//! Maps `reqwest` errors onto [`FetchErrorKind`] so fetch failures can be
//! logged by cause while still collapsing into a single wire error.

use std::error::Error as StdError;

use super::types::{FetchError, FetchErrorKind};

/// Categorizes a `reqwest::Error` into a `FetchErrorKind`.
///
/// Timeouts are checked before connect errors because a connect timeout sets
/// both flags. Connect is checked before request because reqwest reports
/// failed connections as request errors too.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchErrorKind {
    if error.is_timeout() {
        FetchErrorKind::Timeout
    } else if error.is_connect() {
        FetchErrorKind::Connect
    } else if error.is_redirect() {
        FetchErrorKind::Redirect
    } else if error.is_builder() {
        FetchErrorKind::InvalidUrl
    } else if error.is_body() {
        FetchErrorKind::Body
    } else if error.is_decode() {
        FetchErrorKind::Decode
    } else if error.is_request() {
        FetchErrorKind::Request
    } else {
        FetchErrorKind::Other
    }
}

impl FetchError {
    /// Builds a `FetchError` from a `reqwest::Error`, keeping the full cause chain
    /// in the message so DNS and TLS details survive into the logs.
    pub fn from_reqwest(url: &str, error: &reqwest::Error) -> Self {
        let mut message = error.to_string();
        let mut source = StdError::source(error);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        FetchError {
            kind: categorize_reqwest_error(error),
            url: url.to_string(),
            message,
        }
    }
}
