use log::*;
use serde_json::{Value, json};

use crate::{error::ReleaseToolError, result::Result};

/// Handles vcpkg.json manifest version updates.
pub struct VcpkgJson {}

impl VcpkgJson {
    /// Create VcpkgJson handler for manifest version updates.
    pub fn new() -> Self {
        Self {}
    }

    /// Set the top-level `version` field of the manifest in `content`.
    ///
    /// The document is re-serialized with 2-space indentation. Key order is
    /// preserved and every other field is left untouched.
    pub fn update_content(
        &self,
        path: &str,
        content: &str,
        version: &str,
    ) -> Result<String> {
        let mut doc: Value = serde_json::from_str(content)?;

        let Some(manifest) = doc.as_object_mut() else {
            return Err(ReleaseToolError::ManifestNotObject(path.into()).into());
        };

        manifest.insert("version".into(), json!(version));

        info!("updated version in {path} to: {version}");

        Ok(serde_json::to_string_pretty(&doc)?)
    }
}

impl Default for VcpkgJson {
    fn default() -> Self {
        Self::new()
    }
}
