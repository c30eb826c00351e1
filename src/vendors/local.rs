//! Local file loading for vendor tables.

use std::path::Path;
use tokio::fs;

use super::{VendorTable, VendorTableSpec};
use crate::error_handling::VendorTableError;

/// Loads and compiles a vendor table from a JSON file.
///
/// The file has the shape
/// `{"ignore": ["..."], "vendors": [{"name": "...", "pattern": "..."}]}`.
/// `ignore` may be omitted. Vendor order in the file is the output order.
pub(crate) async fn load_from_path(path: &Path) -> Result<VendorTable, VendorTableError> {
    let content = fs::read_to_string(path).await?;
    let spec: VendorTableSpec = serde_json::from_str(&content)?;
    VendorTable::compile(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_from_path_file_not_found() {
        let path = Path::new("nonexistent_vendors.json");
        let result = load_from_path(path).await;
        assert!(matches!(result, Err(VendorTableError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_from_path_invalid_json() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("invalid.json");
        fs::write(&file_path, b"{ invalid json }")
            .await
            .expect("Failed to write invalid JSON");

        let result = load_from_path(&file_path).await;
        let err = result.unwrap_err();
        assert!(matches!(err, VendorTableError::Parse(_)));
        assert!(err.to_string().contains("parse"));
    }

    #[tokio::test]
    async fn test_load_from_path_preserves_order() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("vendors.json");
        let json = r#"{
            "vendors": [
                {"name": "zeta", "pattern": "zeta\\.io"},
                {"name": "alpha", "pattern": "alpha\\.io"},
                {"name": "mid", "pattern": "mid\\.io"}
            ]
        }"#;
        fs::write(&file_path, json)
            .await
            .expect("Failed to write vendors.json");

        let table = load_from_path(&file_path).await.expect("table loads");
        assert_eq!(table.vendor_names(), vec!["zeta", "alpha", "mid"]);
        assert!(table.ignore_patterns().is_empty());
    }

    #[tokio::test]
    async fn test_load_from_path_invalid_regex() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("bad_regex.json");
        let json = r#"{"ignore": ["(unclosed"], "vendors": [{"name": "a", "pattern": "a"}]}"#;
        fs::write(&file_path, json)
            .await
            .expect("Failed to write bad_regex.json");

        let err = load_from_path(&file_path).await.unwrap_err();
        match err {
            VendorTableError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
            other => panic!("expected InvalidPattern, got {:?}", other),
        }
    }
}
