//! Classification result and its wire shape.
//!
//! The JSON object has one `uses_<vendor>` field per configured vendor, so it
//! cannot be a plain derived struct. `Serialize` is implemented by hand to emit
//! the fields in vendor-table order:
//!
//! ```json
//! {"domain": "acme.test", "uses_servicetitan": true, "uses_housecallpro": false,
//!  "uses_jobber": false, "confidence": 0.95, "matches": {"servicetitan": "servicetitan.com"}}
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::{CONFIDENCE_DEFAULT, CONFIDENCE_DETECTED};

/// Outcome of matching one vendor's pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorMatch {
    pub vendor: String,
    /// First matched substring, `None` if the vendor was not detected
    pub matched: Option<String>,
}

impl VendorMatch {
    pub fn detected(&self) -> bool {
        self.matched.is_some()
    }
}

/// Per-vendor outcomes for one page, in vendor-table order.
#[derive(Debug, Clone, PartialEq)]
pub struct VendorDetection {
    pub vendors: Vec<VendorMatch>,
}

impl VendorDetection {
    pub fn any_detected(&self) -> bool {
        self.vendors.iter().any(VendorMatch::detected)
    }

    /// Coarse two-valued score: not a per-vendor probability.
    pub fn confidence(&self) -> f64 {
        if self.any_detected() {
            CONFIDENCE_DETECTED
        } else {
            CONFIDENCE_DEFAULT
        }
    }
}

/// Final result for one domain.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub domain: String,
    pub vendors: Vec<VendorMatch>,
    pub confidence: f64,
}

impl ClassificationResult {
    pub fn new(domain: impl Into<String>, detection: VendorDetection) -> Self {
        let confidence = detection.confidence();
        Self {
            domain: domain.into(),
            vendors: detection.vendors,
            confidence,
        }
    }

    /// Whether `vendor` was detected; `None` for a vendor not in the table.
    pub fn uses(&self, vendor: &str) -> Option<bool> {
        self.vendors
            .iter()
            .find(|v| v.vendor == vendor)
            .map(VendorMatch::detected)
    }

    /// The substring that matched `vendor`, if it was detected.
    pub fn matched(&self, vendor: &str) -> Option<&str> {
        self.vendors
            .iter()
            .find(|v| v.vendor == vendor)
            .and_then(|v| v.matched.as_deref())
    }

    /// Detected vendors and their matched substrings, in table order.
    pub fn matches(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vendors
            .iter()
            .filter_map(|v| v.matched.as_deref().map(|m| (v.vendor.as_str(), m)))
    }
}

/// The `matches` object: detected vendors only.
struct Matches<'a>(&'a [VendorMatch]);

impl Serialize for Matches<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for vendor in self.0 {
            if let Some(matched) = &vendor.matched {
                map.serialize_entry(&vendor.vendor, matched)?;
            }
        }
        map.end()
    }
}

impl Serialize for ClassificationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.vendors.len() + 3))?;
        map.serialize_entry("domain", &self.domain)?;
        for vendor in &self.vendors {
            map.serialize_entry(&format!("uses_{}", vendor.vendor), &vendor.detected())?;
        }
        map.serialize_entry("confidence", &self.confidence)?;
        map.serialize_entry("matches", &Matches(&self.vendors))?;
        map.end()
    }
}
