//! Request orchestration: normalize, fetch, classify.
//!
//! [`Detector`] bundles the two shared, read-only resources (HTTP client and
//! vendor table) and is cloned into every request. Classifying one domain is a
//! straight line with a single suspension point, the homepage fetch. Dropping
//! the returned future (e.g. when the caller disconnects) drops the in-flight
//! request with it.

use std::sync::Arc;

use log::{info, warn};
use url::Url;

use crate::classify::{classify_html, ClassificationResult};
use crate::error_handling::{ClassifyError, FetchError};
use crate::fetch::{fetch_page, homepage_url};
use crate::vendors::VendorTable;

/// Normalizes a raw domain: trims whitespace and lowercases.
pub fn normalize_domain(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Shared state for classification requests.
#[derive(Clone)]
pub struct Detector {
    client: Arc<reqwest::Client>,
    vendors: Arc<VendorTable>,
    /// Fixed fetch target used in place of `https://<domain>/`.
    origin: Option<Url>,
}

impl Detector {
    pub fn new(client: Arc<reqwest::Client>, vendors: Arc<VendorTable>) -> Self {
        Self {
            client,
            vendors,
            origin: None,
        }
    }

    /// Fetches every domain from `origin` instead of its own homepage.
    #[cfg(test)]
    pub(crate) fn with_origin(mut self, origin: Url) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn vendors(&self) -> &VendorTable {
        &self.vendors
    }

    /// Classifies the homepage of `raw_domain`.
    ///
    /// # Errors
    ///
    /// - `ClassifyError::EmptyDomain` if the domain is blank after trimming
    /// - `ClassifyError::FetchFailed` on any transport-level fetch failure,
    ///   carrying the normalized domain
    pub async fn classify(&self, raw_domain: &str) -> Result<ClassificationResult, ClassifyError> {
        let domain = normalize_domain(raw_domain);
        info!("Domain received: {}", domain);
        if domain.is_empty() {
            return Err(ClassifyError::EmptyDomain);
        }

        let html = match self.fetch(&domain).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Fetch error ({}): {}", e.kind, e);
                return Err(ClassifyError::FetchFailed { domain, source: e });
            }
        };
        info!("Fetched {} bytes from {}", html.len(), domain);

        Ok(self.classify_fetched(domain, &html))
    }

    async fn fetch(&self, domain: &str) -> Result<String, FetchError> {
        let url = match &self.origin {
            Some(origin) => origin.clone(),
            None => homepage_url(domain)?,
        };
        fetch_page(&self.client, url.as_str()).await
    }

    /// Classifies an already fetched page and logs the outcome.
    pub fn classify_fetched(&self, domain: String, html: &str) -> ClassificationResult {
        let result = ClassificationResult::new(domain, classify_html(html, &self.vendors));

        let detected: Vec<String> = result
            .vendors
            .iter()
            .map(|v| format!("{}={}", v.vendor, v.detected()))
            .collect();
        info!("Detected: {{{}}}", detected.join(", "));

        let matches: Vec<String> = result
            .matches()
            .map(|(vendor, matched)| format!("{}={:?}", vendor, matched))
            .collect();
        if !matches.is_empty() {
            info!("Matched substrings: {{{}}}", matches.join(", "));
        }

        result
    }
}
