//! Result type used across occutils-release.
//!
//! Every fallible function returns [`Result`], an alias over
//! `color_eyre::eyre::Result`. Domain failures are raised as
//! [`crate::error::ReleaseToolError`] and converted into an eyre report as
//! they propagate, so callers can attach context with `.wrap_err()`:
//!
//! ```rust,ignore
//! use color_eyre::eyre::Context;
//! use crate::result::Result;
//!
//! async fn read_manifest(path: &str) -> Result<String> {
//!     let content = tokio::fs::read_to_string(path)
//!         .await
//!         .wrap_err_with(|| format!("failed to read {path}"))?;
//!     Ok(content)
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout occutils-release.
pub type Result<T> = EyreResult<T>;
