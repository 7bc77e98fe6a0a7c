//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::Octocrab;

use crate::{
    error::ReleaseToolError,
    forge::{config::RemoteConfig, request::LatestRelease, traits::Forge},
    result::Result,
};

/// GitHub forge implementation using Octocrab for release lookups.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with optional personal access token
    /// authentication and API base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let mut builder = Octocrab::builder().base_uri(config.base_uri.clone())?;

        match &config.token {
            Some(token) => {
                builder = builder.personal_token(token.clone());
            }
            None => {
                warn!(
                    "no api token found in environment: requests to {} will be unauthenticated",
                    config.base_uri
                );
            }
        }

        let instance = builder.build()?;

        Ok(Self { config, instance })
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn get_latest_release(&self) -> Result<LatestRelease> {
        info!("fetching latest release for {}", self.config.path());

        let release = self
            .instance
            .repos(&self.config.owner, &self.config.repo)
            .releases()
            .get_latest()
            .await
            .map_err(ReleaseToolError::from)?;

        debug!(
            "latest release for {}: tag={}, name={:?}",
            self.config.path(),
            release.tag_name,
            release.name
        );

        Ok(LatestRelease {
            tag_name: release.tag_name,
            name: release.name,
        })
    }
}
