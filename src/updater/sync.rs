//! Syncs local version files with the latest upstream release.
use color_eyre::eyre::Context;
use log::*;
use std::path::Path;

use crate::{
    config::VersionConfig,
    forge::traits::Forge,
    result::Result,
    updater::{
        cmake::CmakeLists,
        staged::{FileChange, write_staged},
        vcpkg_json::VcpkgJson,
        version::normalize_version,
    },
};

/// Fetches the latest release from a forge and writes its version into the
/// configured build file and manifest.
pub struct VersionSyncer<'a> {
    forge: &'a dyn Forge,
    config: &'a VersionConfig,
}

impl<'a> VersionSyncer<'a> {
    pub fn new(forge: &'a dyn Forge, config: &'a VersionConfig) -> Self {
        Self { forge, config }
    }

    /// Update both version files and return the version written.
    ///
    /// Both files are read and rendered before either is written, so read,
    /// parse and pattern failures leave the files as they were.
    pub async fn update_version_files(&self) -> Result<String> {
        let release = self.forge.get_latest_release().await?;
        let version = normalize_version(&release.tag_name);

        info!(
            "latest release of {}: {} (version {version})",
            self.forge.remote_config().path(),
            release.tag_name
        );

        let cmake_path = Path::new(&self.config.cmake_file);
        let cmake_content = read_file(cmake_path).await?;
        let cmake_content = CmakeLists::new().update_content(
            &self.config.cmake_file,
            &cmake_content,
            &version,
        )?;

        let manifest_path = Path::new(&self.config.manifest_file);
        let manifest_content = read_file(manifest_path).await?;
        let manifest_content = VcpkgJson::new().update_content(
            &self.config.manifest_file,
            &manifest_content,
            &version,
        )?;

        write_staged(&[
            FileChange {
                path: cmake_path.to_path_buf(),
                content: cmake_content,
            },
            FileChange {
                path: manifest_path.to_path_buf(),
                content: manifest_content,
            },
        ])?;

        Ok(version)
    }
}

async fn read_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .wrap_err_with(|| format!("failed to read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::{
        forge::{request::LatestRelease, traits::MockForge},
        test_helpers::*,
    };

    const CMAKE: &str = "cmake_minimum_required(VERSION 3.20)\nset(VCPKG_FMT_TEMPLATE_VERSION 0.9.0)\nproject(occutils)\n";
    const MANIFEST: &str = r#"{
  "name": "occutils",
  "version": "0.9.0",
  "dependencies": []
}"#;

    fn mock_forge(tag: &'static str) -> MockForge {
        let mut forge = MockForge::new();
        forge
            .expect_get_latest_release()
            .times(1)
            .returning(move || {
                Ok(LatestRelease {
                    tag_name: tag.to_string(),
                    name: None,
                })
            });
        forge
            .expect_remote_config()
            .returning(create_test_remote_config);
        forge
    }

    #[test_log::test(tokio::test)]
    async fn updates_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = create_test_version_config(dir.path());
        fs::write(&config.cmake_file, CMAKE).unwrap();
        fs::write(&config.manifest_file, MANIFEST).unwrap();

        let forge = mock_forge("v1.2.3");
        let version = VersionSyncer::new(&forge, &config)
            .update_version_files()
            .await
            .unwrap();

        assert_eq!(version, "1.2.3");
        assert_eq!(
            fs::read_to_string(&config.cmake_file).unwrap(),
            "cmake_minimum_required(VERSION 3.20)\nset(VCPKG_FMT_TEMPLATE_VERSION 1.2.3)\nproject(occutils)\n"
        );
        assert_eq!(
            fs::read_to_string(&config.manifest_file).unwrap(),
            MANIFEST.replace("0.9.0", "1.2.3")
        );
    }

    #[tokio::test]
    async fn uses_tags_without_prefix_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let config = create_test_version_config(dir.path());
        fs::write(&config.cmake_file, CMAKE).unwrap();
        fs::write(&config.manifest_file, MANIFEST).unwrap();

        let forge = mock_forge("2.0.0");
        let version = VersionSyncer::new(&forge, &config)
            .update_version_files()
            .await
            .unwrap();

        assert_eq!(version, "2.0.0");
    }

    #[tokio::test]
    async fn leaves_files_untouched_when_manifest_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let config = create_test_version_config(dir.path());
        fs::write(&config.cmake_file, CMAKE).unwrap();
        fs::write(&config.manifest_file, "{ broken").unwrap();

        let forge = mock_forge("v1.2.3");
        let result = VersionSyncer::new(&forge, &config)
            .update_version_files()
            .await;

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&config.cmake_file).unwrap(), CMAKE);
    }

    #[tokio::test]
    async fn leaves_files_untouched_when_declaration_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = create_test_version_config(dir.path());
        fs::write(&config.cmake_file, "project(occutils)\n").unwrap();
        fs::write(&config.manifest_file, MANIFEST).unwrap();

        let forge = mock_forge("v1.2.3");
        let result = VersionSyncer::new(&forge, &config)
            .update_version_files()
            .await;

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&config.manifest_file).unwrap(), MANIFEST);
    }

    #[tokio::test]
    async fn reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = create_test_version_config(dir.path());

        let forge = mock_forge("v1.2.3");
        let err = VersionSyncer::new(&forge, &config)
            .update_version_files()
            .await
            .unwrap_err();

        assert!(err.to_string().contains("failed to read"));
    }

    #[tokio::test]
    async fn forge_errors_propagate() {
        let dir = tempfile::tempdir().unwrap();
        let config = create_test_version_config(dir.path());

        let mut forge = MockForge::new();
        forge.expect_get_latest_release().returning(|| {
            Err(crate::error::ReleaseToolError::forge("not found").into())
        });

        let err = VersionSyncer::new(&forge, &config)
            .update_version_files()
            .await
            .unwrap_err();

        assert!(err.to_string().contains("not found"));
    }
}
