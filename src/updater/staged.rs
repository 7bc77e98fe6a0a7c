//! Staged writes of rendered file contents.
//!
//! Every change is first written to a temporary file next to its target. Only
//! once all changes are staged are the temporary files renamed over their
//! targets, back to back. A failure while staging leaves every target
//! untouched. A failure during the rename phase can still leave earlier
//! targets updated and is reported as such.
use color_eyre::eyre::Context;
use log::*;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

use crate::result::Result;

/// Full replacement content for a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Path of the file to replace
    pub path: PathBuf,
    /// New contents of the file
    pub content: String,
}

/// Write all `changes`, committing them only after every one was staged.
pub fn write_staged(changes: &[FileChange]) -> Result<()> {
    let mut staged: Vec<(NamedTempFile, PathBuf)> = vec![];

    for change in changes.iter() {
        let target = resolve_target(&change.path);
        let file = stage(&target, &change.content).wrap_err_with(|| {
            format!("failed to stage {}", change.path.display())
        })?;
        staged.push((file, target));
    }

    let mut committed: Vec<PathBuf> = vec![];

    for (file, path) in staged.into_iter() {
        if let Err(err) = file.persist(&path) {
            if !committed.is_empty() {
                error!(
                    "{} failed to update after {} were written: files are out of sync",
                    path.display(),
                    committed
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect::<Vec<String>>()
                        .join(", ")
                );
            }
            return Err(err.error).wrap_err_with(|| {
                format!("failed to write {}", path.display())
            });
        }

        debug!("wrote {}", path.display());
        committed.push(path);
    }

    Ok(())
}

/// Follow symlinks so the rename replaces the file a link points at rather
/// than the link itself. Paths that do not exist yet are used as given.
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn stage(target: &Path, content: &str) -> Result<NamedTempFile> {
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.as_file().sync_all()?;

    // temp files are created owner-only: keep the target's permissions
    if let Ok(metadata) = fs::metadata(target) {
        fs::set_permissions(file.path(), metadata.permissions())?;
    }

    Ok(file)
}
