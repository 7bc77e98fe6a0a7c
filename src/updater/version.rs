use log::*;

/// Derive a version from a release tag by stripping one leading `v`.
///
/// Tags that are not valid semver after normalization are returned as is,
/// with a warning.
pub fn normalize_version(tag: &str) -> String {
    let version = tag.strip_prefix('v').unwrap_or(tag).to_string();

    if let Err(err) = semver::Version::parse(&version) {
        warn!("release tag {tag} does not hold a semantic version: {err}");
    }

    version
}
