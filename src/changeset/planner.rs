//! Release plan providers.
//!
//! The release plan is computed by the changesets tooling itself.
//! [`ChangesetPlanner`] runs a command in the workspace that calls
//! `@changesets/get-release-plan` and writes the resulting plan as JSON to a
//! file, which is then deserialized. Unlike `changeset status`, the library
//! does not fail when packages changed without a changeset.
use async_trait::async_trait;
use color_eyre::eyre::Context;
use log::*;
#[cfg(test)]
use mockall::automock;
use std::path::Path;
use tokio::process::Command;

use crate::{
    changeset::types::ReleasePlan, error::ReleaseToolError, result::Result,
};

/// Node script computing the release plan. Called as
/// `node -e <script> <output file> [since ref]`.
pub const RELEASE_PLAN_SCRIPT: &str = "\
const [output, since] = process.argv.slice(1);
require('@changesets/get-release-plan')
  .default(process.cwd(), since)
  .then((plan) => require('fs').writeFileSync(output, JSON.stringify(plan)))
  .catch((err) => { console.error(err); process.exit(1); });";

/// Default command used to compute a release plan.
pub const DEFAULT_PLANNER_COMMAND: &[&str] = &["node", "-e", RELEASE_PLAN_SCRIPT];

/// Computes the pending changesets and resulting releases of a workspace.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReleasePlanner: Send + Sync {
    /// Return the release plan for `cwd`, diffing against `since_ref` when
    /// one is given.
    async fn get_release_plan(
        &self,
        cwd: &Path,
        since_ref: Option<String>,
    ) -> Result<ReleasePlan>;
}

/// Release planner backed by an external command.
pub struct ChangesetPlanner {
    command: Vec<String>,
}

impl Default for ChangesetPlanner {
    fn default() -> Self {
        Self::new(
            DEFAULT_PLANNER_COMMAND
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

impl ChangesetPlanner {
    /// Create a planner running `command` (program followed by its
    /// arguments). The output file path and, when set, the since ref are
    /// appended as positional arguments on each run.
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }

    fn build_command(
        &self,
        cwd: &Path,
        output_file: &Path,
        since_ref: Option<&str>,
    ) -> Result<Command> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or(ReleaseToolError::EmptyPlannerCommand)?;

        let mut command = Command::new(program);
        command.args(args).arg(output_file).current_dir(cwd);

        if let Some(since_ref) = since_ref {
            command.arg(since_ref);
        }

        Ok(command)
    }
}

#[async_trait]
impl ReleasePlanner for ChangesetPlanner {
    async fn get_release_plan(
        &self,
        cwd: &Path,
        since_ref: Option<String>,
    ) -> Result<ReleasePlan> {
        let plan_file = tempfile::Builder::new()
            .prefix("release-plan-")
            .suffix(".json")
            .tempfile()
            .wrap_err("failed to create release plan file")?;

        let mut command =
            self.build_command(cwd, plan_file.path(), since_ref.as_deref())?;

        debug!(
            "computing release plan in {} (since: {})",
            cwd.display(),
            since_ref.as_deref().unwrap_or("default")
        );

        let output = command.output().await.wrap_err_with(|| {
            format!("failed to run release planner: {}", self.command[0])
        })?;

        if !output.status.success() {
            let stderr =
                String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!("release planner failed: {stderr}");
            return Err(ReleaseToolError::PlannerFailed {
                status: output.status.to_string(),
                stderr,
            }
            .into());
        }

        let content = tokio::fs::read_to_string(plan_file.path()).await?;
        let plan: ReleasePlan = serde_json::from_str(&content)
            .wrap_err("failed to parse release plan")?;

        Ok(plan)
    }
}
