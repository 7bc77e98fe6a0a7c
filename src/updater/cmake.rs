use log::*;
use regex::{Captures, Regex};

use crate::{error::ReleaseToolError, result::Result};

/// Setting holding the package version in `CMakeLists.txt`.
pub const VERSION_SETTING: &str = "VCPKG_FMT_TEMPLATE_VERSION";

/// Handles the `set(VCPKG_FMT_TEMPLATE_VERSION <version>)` declaration in
/// CMake build files.
pub struct CmakeLists {
    declaration_regex: Regex,
}

impl CmakeLists {
    /// Create CmakeLists handler for version declaration updates.
    pub fn new() -> Self {
        // Captures everything up to the value so only the value is replaced
        let declaration_regex =
            Regex::new(&format!(r"(set\({VERSION_SETTING}\s+)\S+\)")).unwrap();

        Self { declaration_regex }
    }

    /// Replace the value of the first version declaration in `content`.
    ///
    /// Every other byte of `content` is preserved. Returns an error when no
    /// declaration is present.
    pub fn update_content(
        &self,
        path: &str,
        content: &str,
        version: &str,
    ) -> Result<String> {
        if !self.declaration_regex.is_match(content) {
            return Err(ReleaseToolError::declaration_not_found(
                path,
                format!("set({VERSION_SETTING} <version>)"),
            )
            .into());
        }

        let updated =
            self.declaration_regex
                .replacen(content, 1, |caps: &Captures| {
                    format!("{}{version})", &caps[1])
                });

        info!("updated {VERSION_SETTING} in {path} to: {version}");

        Ok(updated.into_owned())
    }
}

impl Default for CmakeLists {
    fn default() -> Self {
        Self::new()
    }
}
