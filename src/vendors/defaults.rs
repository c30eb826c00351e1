//! Built-in vendor table.
//!
//! Patterns run against lowercased HTML, so they are written in lowercase.

use super::{VendorSpec, VendorTableSpec};

/// Vendor name and detection pattern, in output order.
pub const DEFAULT_VENDORS: &[(&str, &str)] = &[
    (
        "servicetitan",
        r"(servicetitan\.com|cdn\.servicetitan\.com|st-cdn\.net|stwidget-[a-z0-9]|st-api\.servicetitan)",
    ),
    (
        "housecallpro",
        r"(housecallpro\.com|hcp\.run|app\.housecallpro\.com|onlinerep\.app)",
    ),
    (
        "jobber",
        r"(getjobber\.com|clienthub\.app|book\.getjobber\.com|jobber-api\.com|api\.getjobber\.com)",
    ),
];

/// Known false-positive tokens deleted from the HTML before detection.
///
/// A CDN bootstrap host, a short script name and the generic `data-st-*`
/// attribute all share short tokens with the ServiceTitan patterns.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    r"stackpath\.bootstrapcdn\.com",
    r"st\.js",
    r"data-st-[a-z0-9\-]+",
];

/// Returns the built-in table in its uncompiled form.
pub fn default_spec() -> VendorTableSpec {
    VendorTableSpec {
        ignore: DEFAULT_IGNORE_PATTERNS
            .iter()
            .map(|p| p.to_string())
            .collect(),
        vendors: DEFAULT_VENDORS
            .iter()
            .map(|(name, pattern)| VendorSpec {
                name: name.to_string(),
                pattern: pattern.to_string(),
            })
            .collect(),
    }
}
