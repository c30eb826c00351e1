//! Configuration constants.
//!
//! This module defines the fixed operational parameters of the service:
//! fetch timeout, User-Agent, confidence scores and CLI defaults.

use std::time::Duration;

/// Timeout for the outbound homepage fetch.
///
/// Fixed at 10 seconds. There is no per-call override and no retry: a single
/// failed attempt is reported to the caller immediately.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// User-Agent header sent with every homepage fetch.
pub const USER_AGENT: &str = "Mozilla/5.0 (SignalDetector/1.0)";

/// Scheme used to build the homepage URL. There is no fallback to plain HTTP.
pub const HOMEPAGE_SCHEME: &str = "https";

/// Confidence reported when at least one vendor was detected.
pub const CONFIDENCE_DETECTED: f64 = 0.95;

/// Confidence reported when no vendor was detected.
pub const CONFIDENCE_DEFAULT: f64 = 0.5;

/// Default listen address for the HTTP server.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Default number of domains classified at once in batch mode.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

// Error bodies
pub const EMPTY_DOMAIN_MESSAGE: &str = "No domain received";
pub const FETCH_FAILED_MESSAGE: &str = "fetch_failed";
pub const INVALID_REQUEST_MESSAGE: &str = "invalid_request";
