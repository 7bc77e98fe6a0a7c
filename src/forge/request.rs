use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Latest published release of a repository.
pub struct LatestRelease {
    /// Git tag the release points at (e.g., "v1.2.3").
    pub tag_name: String,
    /// Human readable release title, if set.
    pub name: Option<String>,
}
