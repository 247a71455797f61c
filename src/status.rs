//! Build status detection.
//!
//! A project counts as built when the `bin/` directory next to its manifest
//! holds at least one sub-directory (an output configuration such as `Debug/`).
//! Only presence is checked; file contents and timestamps are not inspected.

use std::{fs, path::Path};

/// Name of the artifact directory the toolchain writes next to a project.
pub const ARTIFACT_DIR: &str = "bin";

/// Check whether a project manifest has build output.
///
/// Returns `false` when `bin/` is missing, unreadable, or contains no
/// sub-directories.
#[must_use]
pub fn is_built(manifest: &Path) -> bool {
    let Some(project_dir) = manifest.parent() else {
        return false;
    };

    let Ok(entries) = fs::read_dir(project_dir.join(ARTIFACT_DIR)) else {
        return false;
    };

    entries
        .flatten()
        .any(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
}
