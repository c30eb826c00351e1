//! Homepage fetching.
//!
//! One `GET https://<domain>` per classification, through the shared client
//! built in [`crate::initialization::init_client`] (fixed User-Agent and
//! timeout). There is no retry and no HTTP fallback.
//!
//! Only transport-level failures are errors. A 404 or 500 page is returned like
//! any other body, because vendor fingerprints show up on error pages too.

use log::debug;
use url::Url;

use crate::config::HOMEPAGE_SCHEME;
use crate::error_handling::{FetchError, FetchErrorKind};

/// Builds the homepage URL for a normalized domain.
///
/// # Errors
///
/// Returns a `FetchErrorKind::InvalidUrl` error if the domain does not form a
/// valid URL (e.g. it contains spaces).
pub fn homepage_url(domain: &str) -> Result<Url, FetchError> {
    let raw = format!("{}://{}", HOMEPAGE_SCHEME, domain);
    Url::parse(&raw).map_err(|e| FetchError {
        kind: FetchErrorKind::InvalidUrl,
        url: raw.clone(),
        message: e.to_string(),
    })
}

/// Fetches `url` and returns its body as text, whatever the status code.
///
/// The body is decoded with the response charset (UTF-8 by default); invalid
/// sequences are replaced rather than rejected.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(url, &e))?;

    let status = response.status();
    if !status.is_success() {
        debug!("{} answered {}; classifying the body anyway", url, status);
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::from_reqwest(url, &e))
}
