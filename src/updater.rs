//! Version file updates driven by the latest upstream release.

/// `CMakeLists.txt` version declaration updates.
pub mod cmake;

/// Staged, all-or-nothing writes of rendered file contents.
pub mod staged;

/// Orchestrates the version-bump pipeline.
pub mod sync;

/// `vcpkg.json` manifest updates.
pub mod vcpkg_json;

/// Tag to version normalization.
pub mod version;
