//! Vendor pattern table.
//!
//! The table is built once at startup, either from the built-in defaults or
//! from a JSON file, and is then shared read-only by every request. Vendor
//! order is significant: it fixes the order of the `uses_<vendor>` fields in
//! every response.

mod defaults;
mod local;

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use regex::Regex;
use serde::Deserialize;

use crate::error_handling::VendorTableError;

pub use defaults::{DEFAULT_IGNORE_PATTERNS, DEFAULT_VENDORS};

/// Uncompiled vendor entry, as written in a vendor file.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorSpec {
    pub name: String,
    pub pattern: String,
}

/// Uncompiled vendor table, as written in a vendor file.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorTableSpec {
    /// Patterns deleted from the HTML before detection, applied in order
    #[serde(default)]
    pub ignore: Vec<String>,
    pub vendors: Vec<VendorSpec>,
}

/// A vendor and the pattern whose first match signals its presence.
#[derive(Debug, Clone)]
pub struct VendorPattern {
    pub name: String,
    pub detection: Regex,
}

/// Compiled, ordered vendor table plus the shared ignore list.
#[derive(Debug, Clone)]
pub struct VendorTable {
    vendors: Vec<VendorPattern>,
    ignore_patterns: Vec<Regex>,
}

fn compile_pattern(pattern: &str) -> Result<Regex, VendorTableError> {
    Regex::new(pattern).map_err(|source| VendorTableError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

impl VendorTable {
    /// Compiles and validates a table spec.
    ///
    /// Rejects an empty vendor list, empty or duplicate names and any pattern
    /// that is not a valid regex.
    pub fn compile(spec: VendorTableSpec) -> Result<Self, VendorTableError> {
        if spec.vendors.is_empty() {
            return Err(VendorTableError::Empty);
        }

        let mut seen = HashSet::new();
        let mut vendors = Vec::with_capacity(spec.vendors.len());
        for (index, vendor) in spec.vendors.into_iter().enumerate() {
            if vendor.name.trim().is_empty() {
                return Err(VendorTableError::EmptyName(index));
            }
            if !seen.insert(vendor.name.clone()) {
                return Err(VendorTableError::DuplicateName(vendor.name));
            }
            vendors.push(VendorPattern {
                detection: compile_pattern(&vendor.pattern)?,
                name: vendor.name,
            });
        }

        let ignore_patterns = spec
            .ignore
            .iter()
            .map(|p| compile_pattern(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            vendors,
            ignore_patterns,
        })
    }

    /// The compiled-in table.
    pub fn builtin() -> Result<Self, VendorTableError> {
        Self::compile(defaults::default_spec())
    }

    pub fn vendors(&self) -> &[VendorPattern] {
        &self.vendors
    }

    pub fn ignore_patterns(&self) -> &[Regex] {
        &self.ignore_patterns
    }

    pub fn vendor_names(&self) -> Vec<&str> {
        self.vendors.iter().map(|v| v.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}

/// Builds the process-wide vendor table.
///
/// Loads `path` when given, otherwise compiles the built-in defaults.
pub async fn init_vendor_table(path: Option<&Path>) -> Result<Arc<VendorTable>, VendorTableError> {
    let table = match path {
        Some(path) => {
            log::info!("Loading vendor table from {}", path.display());
            local::load_from_path(path).await?
        }
        None => VendorTable::builtin()?,
    };
    log::info!(
        "Vendor table ready: {} vendors ({}), {} ignore patterns",
        table.len(),
        table.vendor_names().join(", "),
        table.ignore_patterns().len()
    );
    Ok(Arc::new(table))
}
