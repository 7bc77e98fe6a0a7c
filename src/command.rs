//! Command execution for occutils-release.
//!
//! - **changelog**: collect pending changesets and print them as a markdown
//!   changelog section
//! - **version_bump**: write the latest upstream release version into the
//!   CMake build file and the vcpkg manifest

/// Changeset summary command.
pub mod changelog;

/// Upstream version sync command.
pub mod version_bump;
