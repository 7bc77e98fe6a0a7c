//! Source-control hosting API access.
//!
//! The version-bump pipeline only needs one question answered by the forge:
//! what is the latest published release of a repository. The [`traits::Forge`]
//! seam keeps the HTTP client injectable so tests can substitute a mock.

/// Connection settings and token resolution.
pub mod config;

/// GitHub API client implementation.
pub mod github;

/// Shared request and response types.
pub mod request;

/// Forge abstraction.
pub mod traits;
