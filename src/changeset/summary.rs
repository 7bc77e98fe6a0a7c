//! Collects changeset entries and formats release summaries.
use derive_builder::Builder;
use log::*;
use regex::Regex;
use std::{path::PathBuf, sync::LazyLock};

use crate::{
    changeset::{
        DEFAULT_SELF_PACKAGE,
        planner::ReleasePlanner,
        types::{Changeset, ChangesetEntries, Release, ReleaseSummary},
    },
    result::Result,
};

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*$").expect("valid trailing comma regex"));

/// Inputs for [`get_changeset_entries`].
#[derive(Debug, Clone, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct EntriesOptions {
    /// Directory holding the changesets workspace.
    pub cwd: PathBuf,
    /// Git reference to diff against. The planner's own default is used when
    /// unset.
    pub since_ref: Option<String>,
    /// Package names dropped from the output. Defaults to the self-package.
    pub exclude: Option<Vec<String>>,
    /// Package always kept and always ordered first.
    pub self_package: String,
}

impl Default for EntriesOptions {
    fn default() -> Self {
        Self {
            cwd: PathBuf::from("."),
            since_ref: None,
            exclude: None,
            self_package: DEFAULT_SELF_PACKAGE.to_string(),
        }
    }
}

impl EntriesOptions {
    pub fn builder() -> EntriesOptionsBuilder {
        EntriesOptionsBuilder::default()
    }

    fn excluded(&self) -> Vec<String> {
        match &self.exclude {
            Some(exclude) => exclude.clone(),
            None => vec![self.self_package.clone()],
        }
    }
}

/// Load the release plan and reduce it to the releases worth reporting.
///
/// Releases without changesets are dropped unless they belong to the
/// self-package, excluded names are removed, and the self-package is moved to
/// the front while every other release keeps the planner's order.
pub async fn get_changeset_entries(
    planner: &dyn ReleasePlanner,
    options: &EntriesOptions,
) -> Result<ChangesetEntries> {
    let plan = planner
        .get_release_plan(&options.cwd, options.since_ref.clone())
        .await?;

    debug!(
        "release plan contains {} changesets and {} releases",
        plan.changesets.len(),
        plan.releases.len()
    );

    let exclude = options.excluded();
    let self_package = options.self_package.as_str();

    let mut releases = plan
        .releases
        .into_iter()
        .filter(|r| r.name == self_package || !r.changesets.is_empty())
        .filter(|r| !exclude.contains(&r.name))
        .collect::<Vec<Release>>();

    // sort_by_key is stable: everything but the self-package keeps its order
    releases.sort_by_key(|r| r.name != self_package);

    debug!("reporting {} releases", releases.len());

    let summary = releases
        .iter()
        .map(|release| get_release_summary(&plan.changesets, release))
        .collect();

    Ok(ChangesetEntries { releases, summary })
}

/// Format the changesets of one release as markdown bullet lines.
///
/// Unknown changeset ids yield `None` at their position. Summaries that
/// already start with `-` are kept verbatim.
pub fn get_release_summary(
    changesets: &[Changeset],
    release: &Release,
) -> ReleaseSummary {
    let formatted = release
        .changesets
        .iter()
        .map(|id| {
            let summary = changesets
                .iter()
                .find(|cs| &cs.id == id)
                .map(|cs| cs.summary.clone());

            if summary.is_none() {
                warn!("changeset {id} not found in release plan");
            }

            summary.map(format_summary)
        })
        .collect();

    let label = format!("{}@{}", release.name, release.new_version);
    let display_name = format!("`{}`", TRAILING_COMMA.replace(&label, ""));

    ReleaseSummary {
        name: release.name.clone(),
        bump: release.bump,
        old_version: release.old_version.clone(),
        new_version: release.new_version.clone(),
        changesets: formatted,
        display_name,
    }
}

fn format_summary(summary: String) -> String {
    if summary.is_empty() || summary.trim().starts_with('-') {
        return summary;
    }

    format!("- {summary} \n")
}
