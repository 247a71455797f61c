//! Directory scanning and manifest detection functionality.
//!
//! This module walks a directory tree and returns the build manifests it
//! contains. Project manifests may be found at any depth; solution manifests
//! are only considered at the top level of the scan root.

use std::path::{Path, PathBuf};

use colored::Colorize;
use walkdir::WalkDir;

use crate::{config::ScanOptions, module::ModuleKind};

/// File extensions recognised as project manifests.
pub const PROJECT_EXTENSIONS: &[&str] = &["csproj", "fsproj", "vbproj"];

/// File extensions recognised as solution manifests.
pub const SOLUTION_EXTENSIONS: &[&str] = &["sln", "slnx"];

/// How deep project manifests are searched for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManifestScope {
    /// Anywhere below the scan root
    AllProjects,

    /// Directly inside the scan root only
    TopLevelOnly,
}

impl ManifestScope {
    const fn max_depth(self) -> usize {
        match self {
            Self::AllProjects => usize::MAX,
            Self::TopLevelOnly => 1,
        }
    }
}

/// Directory scanner for build manifests.
///
/// Results come back in filesystem enumeration order; no sorting is applied.
pub struct Scanner {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,
}

impl Scanner {
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self { scan_options }
    }

    /// Classify a path by its extension.
    ///
    /// Returns `None` for anything that is not a recognised manifest.
    #[must_use]
    pub fn manifest_kind(path: &Path) -> Option<ModuleKind> {
        let ext = path.extension()?.to_str()?;

        if PROJECT_EXTENSIONS
            .iter()
            .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        {
            Some(ModuleKind::Project)
        } else if SOLUTION_EXTENSIONS
            .iter()
            .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        {
            Some(ModuleKind::Solution)
        } else {
            None
        }
    }

    /// Scan for every manifest: projects within `scope`, then top-level solutions.
    pub fn scan(&self, root: &Path, scope: ManifestScope) -> Vec<PathBuf> {
        let mut manifests = self.project_manifests(root, scope);
        manifests.extend(self.solution_manifests(root));
        manifests
    }

    /// Find project manifests under `root`.
    pub fn project_manifests(&self, root: &Path, scope: ManifestScope) -> Vec<PathBuf> {
        self.find_manifests(root, scope.max_depth(), ModuleKind::Project)
    }

    /// Find solution manifests directly inside `root`.
    pub fn solution_manifests(&self, root: &Path) -> Vec<PathBuf> {
        self.find_manifests(root, 1, ModuleKind::Solution)
    }

    fn find_manifests(&self, root: &Path, max_depth: usize, kind: ModuleKind) -> Vec<PathBuf> {
        let mut manifests = Vec::new();

        for entry in WalkDir::new(root).min_depth(1).max_depth(max_depth) {
            match entry {
                Ok(entry) => {
                    // `Path::is_file` follows symlinks, so linked manifests count too.
                    if entry.path().is_file()
                        && Self::manifest_kind(entry.path()) == Some(kind)
                    {
                        manifests.push(entry.into_path());
                    }
                }
                Err(e) => {
                    if self.scan_options.verbose {
                        eprintln!("{}", format!("Warning: {e}").red());
                    }
                }
            }
        }

        manifests
    }
}
