//! Core module data structures.
//!
//! This module defines the record produced for every manifest found during a
//! scan. A [`ModuleInfo`] is built fresh for each invocation and never changes
//! after construction.

use std::{
    fmt::{Display, Formatter, Result},
    path::{Path, PathBuf},
};

/// Kind of build manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleKind {
    /// A single buildable project (`.csproj`, `.fsproj`, `.vbproj`)
    Project,

    /// An aggregate group of projects (`.sln`, `.slnx`)
    ///
    /// Solutions have no artifact directory of their own, so they are never
    /// reported as built.
    Solution,
}

impl ModuleKind {
    /// Icon used when rendering the kind in listings.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Project => "📦",
            Self::Solution => "🗂️",
        }
    }
}

impl Display for ModuleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Project => write!(f, "Project"),
            Self::Solution => write!(f, "Solution"),
        }
    }
}

/// A manifest discovered under the scan root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleInfo {
    name: String,
    kind: ModuleKind,
    path: PathBuf,
    is_built: bool,
}

impl ModuleInfo {
    /// Create a module record.
    ///
    /// # Arguments
    ///
    /// * `name` - Manifest file name without extension
    /// * `kind` - Project or solution
    /// * `path` - Manifest path relative to the scan root
    /// * `is_built` - Result of the build status check; ignored for solutions
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ModuleKind, path: PathBuf, is_built: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            path,
            is_built: kind == ModuleKind::Project && is_built,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> ModuleKind {
        self.kind
    }

    /// Manifest path relative to the scan root.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn is_built(&self) -> bool {
        self.is_built
    }
}

impl Display for ModuleInfo {
    /// Format the module as a single listing line.
    ///
    /// # Examples
    ///
    /// - `📦 Api [Project] src/Api/Api.csproj ✅ built`
    /// - `🗂️ Shop [Solution] Shop.sln`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.kind.icon(),
            self.name,
            self.kind,
            self.path.display()
        )?;

        if self.is_built {
            write!(f, " ✅ built")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_is_never_built() {
        let module = ModuleInfo::new("Root", ModuleKind::Solution, PathBuf::from("Root.sln"), true);

        assert!(!module.is_built());
    }

    #[test]
    fn test_project_keeps_built_flag() {
        let built = ModuleInfo::new("A", ModuleKind::Project, PathBuf::from("A/A.csproj"), true);
        let fresh = ModuleInfo::new("B", ModuleKind::Project, PathBuf::from("B/B.csproj"), false);

        assert!(built.is_built());
        assert!(!fresh.is_built());
    }

    #[test]
    fn test_display_project() {
        let module = ModuleInfo::new("Api", ModuleKind::Project, PathBuf::from("Api/Api.csproj"), true);

        let rendered = module.to_string();
        assert!(rendered.contains("Api [Project]"));
        assert!(rendered.contains("built"));
    }

    #[test]
    fn test_display_solution() {
        let module = ModuleInfo::new("Shop", ModuleKind::Solution, PathBuf::from("Shop.sln"), false);

        let rendered = module.to_string();
        assert!(rendered.contains("Shop [Solution] Shop.sln"));
        assert!(!rendered.contains("built"));
    }
}
