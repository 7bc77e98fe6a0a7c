//! Configuration loading and parsing for `occutils-release.toml` files.
//!
//! Every field is optional; a missing file yields the defaults used to
//! release occutils.
use color_eyre::eyre::Context;
use log::*;
use serde::Deserialize;
use std::path::Path;

use crate::{
    changeset::{DEFAULT_SELF_PACKAGE, planner::DEFAULT_PLANNER_COMMAND},
    forge::config::DEFAULT_API_BASE_URI,
    result::Result,
};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "occutils-release.toml";

/// Changeset summary settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct ChangelogConfig {
    /// Package always reported on, even without changesets.
    pub self_package: String,
    /// Directory holding the changesets workspace.
    pub cwd: String,
    /// Git reference to diff against (default: the planner's own default).
    pub since_ref: Option<String>,
    /// Packages left out of the summary (default: the self-package).
    pub exclude: Option<Vec<String>>,
    /// Command computing the release plan.
    pub planner_command: Vec<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            self_package: DEFAULT_SELF_PACKAGE.into(),
            cwd: ".".into(),
            since_ref: None,
            exclude: None,
            planner_command: DEFAULT_PLANNER_COMMAND
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Upstream release and version file settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VersionConfig {
    /// Owner of the repository whose latest release is used.
    pub owner: String,
    /// Name of the repository whose latest release is used.
    pub repo: String,
    /// Build file holding `set(VCPKG_FMT_TEMPLATE_VERSION <version>)`.
    pub cmake_file: String,
    /// JSON manifest with a top-level `version` field.
    pub manifest_file: String,
    /// REST API base URI of the forge.
    pub api_base_uri: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            owner: "paulbuechner".into(),
            repo: "occutils".into(),
            cmake_file: "CMakeLists.txt".into(),
            manifest_file: "vcpkg.json".into(),
            api_base_uri: DEFAULT_API_BASE_URI.into(),
        }
    }
}

/// Root configuration structure for `occutils-release.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changeset summary settings.
    pub changelog: ChangelogConfig,
    /// Version bump settings.
    pub version: VersionConfig,
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no configuration found at {}: using default", path.display());
            return Ok(Config::default());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .wrap_err_with(|| format!("failed to parse {}", path.display()))?;

        Ok(config)
    }
}
