//! Error type definitions.
//!
//! This module defines the errors the service can produce: startup errors,
//! vendor-table errors, fetch errors and the per-request classification errors.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors raised while building a vendor table.
#[derive(Error, Debug)]
pub enum VendorTableError {
    /// The vendor file could not be read.
    #[error("Failed to read vendor file: {0}")]
    Io(#[from] std::io::Error),

    /// The vendor file is not valid JSON or has the wrong shape.
    #[error("Failed to parse vendor file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A detection or ignore pattern is not a valid regular expression.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The table has no vendors.
    #[error("Vendor table has no vendors")]
    Empty,

    /// A vendor has an empty name.
    #[error("Vendor at position {0} has an empty name")]
    EmptyName(usize),

    /// Two vendors share a name.
    #[error("Duplicate vendor name '{0}'")]
    DuplicateName(String),
}

/// Transport-level failure categories for the homepage fetch.
///
/// All of them surface to the caller as the same `fetch_failed` body; the
/// kind is only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum FetchErrorKind {
    /// The domain does not form a valid URL.
    InvalidUrl,
    Timeout,
    /// DNS resolution, refused or reset connection, TLS handshake.
    Connect,
    Redirect,
    Request,
    Body,
    Decode,
    Other,
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::InvalidUrl => "invalid URL",
            FetchErrorKind::Timeout => "timeout",
            FetchErrorKind::Connect => "connect error",
            FetchErrorKind::Redirect => "redirect error",
            FetchErrorKind::Request => "request error",
            FetchErrorKind::Body => "body error",
            FetchErrorKind::Decode => "decode error",
            FetchErrorKind::Other => "other error",
        }
    }
}

/// A failed homepage fetch.
#[derive(Error, Debug)]
#[error("{kind} fetching {url}: {message}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub url: String,
    pub message: String,
}

/// Per-request classification failures.
///
/// Each variant maps to exactly one HTTP status and JSON body.
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// The domain was empty after trimming.
    #[error("No domain received")]
    EmptyDomain,

    /// The homepage could not be fetched.
    #[error("Fetch failed for {domain}: {source}")]
    FetchFailed {
        domain: String,
        #[source]
        source: FetchError,
    },
}
