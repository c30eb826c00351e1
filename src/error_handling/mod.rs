//! Error handling.
//!
//! This module provides:
//! - Error type definitions for startup, vendor tables, fetches and requests
//! - Categorization of `reqwest` errors into fetch failure kinds
//!
//! Only two failures reach callers: `EmptyDomain` and `FetchFailed`. Everything
//! else is a startup error reported by the binary.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{ClassifyError, FetchError, FetchErrorKind, InitializationError, VendorTableError};
