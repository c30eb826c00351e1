//! HTML vendor classification.
//!
//! Classification runs in three steps over the fetched page:
//! 1. Lowercase the whole body so matching is case-insensitive.
//! 2. Delete every match of each ignore pattern, in order. Deletion inserts no
//!    separator, so text on either side of a removed token is joined.
//! 3. Search each vendor's detection pattern once, in table order, recording
//!    the first match only.
//!
//! The algorithm never names a vendor; everything vendor-specific lives in the
//! [`VendorTable`].

mod result;

use regex::Regex;

use crate::vendors::VendorTable;

pub use result::{ClassificationResult, VendorDetection, VendorMatch};

/// Removes every match of each ignore pattern from `html`, in order.
pub fn scrub(html: &str, ignore_patterns: &[Regex]) -> String {
    let mut scrubbed = html.to_string();
    for pattern in ignore_patterns {
        let replaced = pattern.replace_all(&scrubbed, "").into_owned();
        scrubbed = replaced;
    }
    scrubbed
}

/// Classifies raw HTML against the vendor table.
///
/// Deterministic: the same bytes always produce the same detection.
pub fn classify_html(html: &str, table: &VendorTable) -> VendorDetection {
    let lowered = html.to_lowercase();
    let scrubbed = scrub(&lowered, table.ignore_patterns());

    let vendors = table
        .vendors()
        .iter()
        .map(|vendor| VendorMatch {
            vendor: vendor.name.clone(),
            matched: vendor
                .detection
                .find(&scrubbed)
                .map(|m| m.as_str().to_string()),
        })
        .collect();

    VendorDetection { vendors }
}
