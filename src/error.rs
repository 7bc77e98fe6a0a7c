//! Domain errors raised by the changelog and version-bump pipelines.

use thiserror::Error;

/// Failures that originate in this crate rather than in a collaborator.
#[derive(Error, Debug)]
pub enum ReleaseToolError {
    #[error("Version declaration not found in {path}: expected {pattern}")]
    DeclarationNotFound { path: String, pattern: String },

    #[error("Manifest {0} is not a JSON object")]
    ManifestNotObject(String),

    #[error("Release planner command failed ({status}): {stderr}")]
    PlannerFailed { status: String, stderr: String },

    #[error("Release planner command is empty")]
    EmptyPlannerCommand,

    #[error("Forge operation failed: {0}")]
    ForgeError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,
}

impl ReleaseToolError {
    /// Create a forge error with context
    pub fn forge(msg: impl Into<String>) -> Self {
        Self::ForgeError(msg.into())
    }

    /// Create an error for a missing declaration in a text file
    pub fn declaration_not_found(
        path: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Self::DeclarationNotFound {
            path: path.into(),
            pattern: pattern.into(),
        }
    }
}

// Implement From for octocrab errors (GitHub API)
impl From<octocrab::Error> for ReleaseToolError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if source.message.contains("rate limit") =>
            {
                Self::RateLimitExceeded
            }
            _ => Self::ForgeError(format!("GitHub API error: {}", err)),
        }
    }
}
