//! Configuration for forge platform connections.
use log::*;
use secrecy::SecretString;
use std::env;

/// Default GitHub REST API base URI.
pub const DEFAULT_API_BASE_URI: &str = "https://api.github.com";
/// Primary environment variable holding the API token.
pub const TOKEN_ENV_VAR: &str = "GH_TOKEN";
/// Fallback environment variable holding the API token.
pub const FALLBACK_TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Remote repository connection configuration.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// API base URI (e.g., "https://api.github.com").
    pub base_uri: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication, if one was supplied.
    pub token: Option<SecretString>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_uri: DEFAULT_API_BASE_URI.to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            token: None,
        }
    }
}

impl RemoteConfig {
    /// Full "owner/repo" path, used in log output.
    pub fn path(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Read the API token from the environment, trying `GH_TOKEN` first and
/// then `GITHUB_TOKEN`. Empty values are ignored.
pub fn token_from_env() -> Option<SecretString> {
    for var in [TOKEN_ENV_VAR, FALLBACK_TOKEN_ENV_VAR] {
        if let Ok(value) = env::var(var)
            && !value.is_empty()
        {
            debug!("using api token from {var}");
            return Some(SecretString::from(value));
        }
    }

    None
}
