use log::*;

use crate::{
    config::{Config, VersionConfig},
    forge::{
        config::{RemoteConfig, token_from_env},
        github::Github,
        traits::Forge,
    },
    result::Result,
    updater::sync::VersionSyncer,
};

/// Sync the version files with the latest GitHub release.
pub async fn execute(config: &Config) -> Result<()> {
    let result: Result<String> = async {
        let forge = Github::new(remote_config(&config.version))?;
        run(&forge, &config.version).await
    }
    .await;

    match result {
        Ok(version) => {
            info!("VCPKG_FMT_TEMPLATE_VERSION and vcpkg.json updated to {version}");
            Ok(())
        }
        Err(err) => {
            error!("Failed to update versions: {err:#}");
            Err(err)
        }
    }
}

/// Sync the version files through `forge` and return the version written.
pub async fn run(forge: &dyn Forge, config: &VersionConfig) -> Result<String> {
    VersionSyncer::new(forge, config).update_version_files().await
}

fn remote_config(config: &VersionConfig) -> RemoteConfig {
    RemoteConfig {
        base_uri: config.api_base_uri.clone(),
        owner: config.owner.clone(),
        repo: config.repo.clone(),
        token: token_from_env(),
    }
}
