//! Reading the current version out of the project manifest.
//!
//! The manifest is the `package.json` in the project root, a JSON document
//! with a string `version` field. It is only ever read here; writing the new version back
//! is left to the external tool in [`crate::delegate`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::Version;
use crate::error::{BumpError, Result};

/// Manifest file name, relative to the project root
pub const MANIFEST_FILE: &str = "package.json";

/// Path of the manifest file inside a project root
pub fn manifest_path(root: &Path) -> PathBuf {
    root.join(MANIFEST_FILE)
}

/// Read the manifest at `path` and parse its `version` field.
///
/// Returns [`BumpError::ManifestRead`] if the file is missing, unreadable,
/// not a JSON object or lacks a string `version` field, and
/// [`BumpError::VersionParse`] if the field is not `X.Y.Z`.
pub fn read_manifest_version(path: &Path) -> Result<Version> {
    let content = fs::read_to_string(path).map_err(|e| BumpError::manifest(path, e.to_string()))?;
    let version = parse_manifest_version(path, &content)?;
    debug!(path = %path.display(), %version, "read manifest version");
    Ok(version)
}

/// Parse the `version` field out of manifest contents already in memory.
///
/// `path` is only used for error messages.
pub fn parse_manifest_version(path: &Path, content: &str) -> Result<Version> {
    let json: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| BumpError::manifest(path, format!("Invalid JSON: {}", e)))?;

    let object = json
        .as_object()
        .ok_or_else(|| BumpError::manifest(path, "top-level value is not a JSON object"))?;

    let raw = match object.get("version") {
        Some(serde_json::Value::String(s)) => s,
        Some(_) => {
            return Err(BumpError::manifest(path, "'version' field is not a string"));
        }
        None => return Err(BumpError::manifest(path, "missing 'version' field")),
    };

    Version::parse(raw)
}
