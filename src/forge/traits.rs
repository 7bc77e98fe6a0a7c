//! Traits related to remote git forges
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{
    forge::{config::RemoteConfig, request::LatestRelease},
    result::Result,
};

#[cfg_attr(test, automock)]
#[async_trait]
/// A forge bound to one repository. The owner and repository name come from
/// the [`RemoteConfig`] the forge was built with.
pub trait Forge: Send + Sync {
    fn remote_config(&self) -> RemoteConfig;
    /// Latest published release of the configured repository.
    async fn get_latest_release(&self) -> Result<LatestRelease>;
}
