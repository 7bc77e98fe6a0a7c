//! Data model for release plans produced by the changesets tool.
use serde::{Deserialize, Serialize};

/// Semver bump requested for a package.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    Major,
    Minor,
    Patch,
    #[default]
    None,
}

/// Package bump declared by a single changeset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangesetRelease {
    pub name: String,
    #[serde(rename = "type")]
    pub bump: BumpType,
}

/// One pending change, keyed by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changeset {
    pub id: String,
    pub summary: String,
    #[serde(default)]
    pub releases: Vec<ChangesetRelease>,
}

/// Computed release of one package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub name: String,
    #[serde(rename = "type", default)]
    pub bump: BumpType,
    #[serde(default)]
    pub old_version: String,
    pub new_version: String,
    /// Ids of the changesets rolled into this release, in plan order.
    #[serde(default)]
    pub changesets: Vec<String>,
}

/// Pending changesets and the releases they produce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleasePlan {
    #[serde(default)]
    pub changesets: Vec<Changeset>,
    #[serde(default)]
    pub releases: Vec<Release>,
}

/// A release plus its changelog lines and display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub bump: BumpType,
    pub old_version: String,
    pub new_version: String,
    /// Formatted summary per changeset id. `None` when the id is unknown to
    /// the plan.
    pub changesets: Vec<Option<String>>,
    pub display_name: String,
}

/// Ordered releases and their summaries. Both vectors are index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangesetEntries {
    pub releases: Vec<Release>,
    pub summary: Vec<ReleaseSummary>,
}
