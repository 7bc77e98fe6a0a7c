//! Common test helper functions shared across test modules.
use std::path::Path;

use crate::{
    changeset::{
        summary::EntriesOptions,
        types::{BumpType, Changeset, Release},
    },
    config::VersionConfig,
    forge::config::RemoteConfig,
};

/// Self-package name used by changeset tests.
pub const TEST_SELF_PACKAGE: &str = "test-addon";

/// Creates a changeset with the given id and summary.
pub fn create_test_changeset(id: &str, summary: &str) -> Changeset {
    Changeset {
        id: id.to_string(),
        summary: summary.to_string(),
        releases: vec![],
    }
}

/// Creates a patch release of `name` including the given changeset ids.
///
/// # Example
/// ```ignore
/// let release = create_test_release("pkg-one", "1.0.1", &["brave-lions"]);
/// ```
pub fn create_test_release(
    name: &str,
    new_version: &str,
    changesets: &[&str],
) -> Release {
    Release {
        name: name.to_string(),
        bump: BumpType::Patch,
        old_version: "0.0.0".to_string(),
        new_version: new_version.to_string(),
        changesets: changesets.iter().map(|id| id.to_string()).collect(),
    }
}

/// Creates entry options using [`TEST_SELF_PACKAGE`] as the self-package.
pub fn create_test_entries_options(
    exclude: Option<Vec<String>>,
) -> EntriesOptions {
    EntriesOptions {
        cwd: ".".into(),
        since_ref: None,
        exclude,
        self_package: TEST_SELF_PACKAGE.to_string(),
    }
}

/// Creates a test RemoteConfig with sensible defaults.
pub fn create_test_remote_config() -> RemoteConfig {
    RemoteConfig {
        owner: "test".to_string(),
        repo: "repo".to_string(),
        ..RemoteConfig::default()
    }
}

/// Creates a VersionConfig whose files live in `dir`.
pub fn create_test_version_config(dir: &Path) -> VersionConfig {
    VersionConfig {
        cmake_file: dir.join("CMakeLists.txt").to_string_lossy().to_string(),
        manifest_file: dir.join("vcpkg.json").to_string_lossy().to_string(),
        ..VersionConfig::default()
    }
}
