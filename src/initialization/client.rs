//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::{FETCH_TIMEOUT, USER_AGENT};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for homepage fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - the fixed `USER_AGENT` header
/// - the fixed `FETCH_TIMEOUT` covering connect, TLS, headers and body
/// - reqwest's default redirect policy
///
/// The client pools connections, so one instance is shared by all requests.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails (e.g. the TLS backend
/// cannot be initialized).
pub fn init_client() -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}
