//! Changeset collection and changelog summaries.
//!
//! A release plan is obtained from a [`planner::ReleasePlanner`], filtered
//! down to the releases worth reporting, ordered with the self-package first,
//! and turned into per-release bullet lists ready to be rendered as a
//! markdown changelog section.

/// Markdown rendering of collected entries.
pub mod changelog;

/// Changelog date headers.
pub mod date;

/// Release plan providers.
pub mod planner;

/// Filtering, ordering and summary formatting.
pub mod summary;

/// Release plan data model.
pub mod types;

/// Package that is always reported on, even without changesets.
pub const DEFAULT_SELF_PACKAGE: &str = "storybook-addon-data-theme-switcher";
