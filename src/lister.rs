//! Module inventory.
//!
//! The lister combines the [`Scanner`] and the build status check into the
//! [`ModuleInfo`] records shown by the `list` subcommand. Every call rescans the
//! tree; nothing is cached between calls.

use std::path::Path;

use crate::{
    config::ListOptions,
    module::{ModuleInfo, ModuleKind, Modules},
    scanner::{ManifestScope, Scanner},
    status::is_built,
};

/// Builds module inventories for a scan root.
pub struct Lister {
    scanner: Scanner,
}

impl Lister {
    #[must_use]
    pub const fn new(scanner: Scanner) -> Self {
        Self { scanner }
    }

    /// Every project in the tree (status checked) followed by every
    /// top-level solution (never built).
    pub fn list_all(&self, root: &Path) -> Modules {
        let projects = self
            .scanner
            .project_manifests(root, ManifestScope::AllProjects)
            .into_iter()
            .map(|manifest| {
                let built = is_built(&manifest);
                module_info(root, &manifest, ModuleKind::Project, built)
            });

        let solutions = self
            .scanner
            .solution_manifests(root)
            .into_iter()
            .map(|manifest| module_info(root, &manifest, ModuleKind::Solution, false));

        projects.chain(solutions).collect::<Vec<_>>().into()
    }

    /// Only the projects whose build status check passes.
    pub fn list_built(&self, root: &Path) -> Modules {
        self.scanner
            .project_manifests(root, ManifestScope::AllProjects)
            .into_iter()
            .filter(|manifest| is_built(manifest))
            .map(|manifest| module_info(root, &manifest, ModuleKind::Project, true))
            .collect::<Vec<_>>()
            .into()
    }

    /// Print the blocks requested by `options`.
    ///
    /// When both blocks are requested they are computed and printed
    /// independently, full inventory first.
    pub fn print(&self, root: &Path, options: ListOptions) {
        if options.modules {
            self.list_all(root).print_listing("📋 Modules:");
        }

        if options.built {
            self.list_built(root).print_listing("✅ Built modules:");
        }
    }
}

fn module_info(root: &Path, manifest: &Path, kind: ModuleKind, built: bool) -> ModuleInfo {
    let name = manifest
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let relative = manifest.strip_prefix(root).unwrap_or(manifest).to_path_buf();

    ModuleInfo::new(name, kind, relative, built)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanOptions;
    use std::{fs, path::PathBuf};
    use tempfile::TempDir;

    fn lister() -> Lister {
        Lister::new(Scanner::new(ScanOptions::default()))
    }

    fn create_file(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_module_info_uses_stem_and_relative_path() {
        let root = Path::new("/work");
        let info = module_info(
            root,
            Path::new("/work/src/Api/Api.csproj"),
            ModuleKind::Project,
            false,
        );

        assert_eq!(info.name(), "Api");
        assert_eq!(info.path(), Path::new("src/Api/Api.csproj"));
    }

    #[test]
    fn test_list_all_counts_projects_and_solutions() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path();

        create_file(&base.join("A/A.csproj"));
        create_file(&base.join("B/nested/B.csproj"));
        create_file(&base.join("One.sln"));
        create_file(&base.join("Two.sln"));
        create_file(&base.join("sub/Ignored.sln"));

        let modules = lister().list_all(base);

        assert_eq!(modules.len(), 4);
        assert_eq!(modules.count_of(ModuleKind::Project), 2);
        assert_eq!(modules.count_of(ModuleKind::Solution), 2);
        assert!(modules
            .as_slice()
            .iter()
            .filter(|m| m.kind() == ModuleKind::Solution)
            .all(|m| !m.is_built()));
    }

    #[test]
    fn test_list_built_excludes_solutions_and_unbuilt() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path();

        create_file(&base.join("A/A.csproj"));
        fs::create_dir_all(base.join("A/bin/Release")).unwrap();
        create_file(&base.join("B/B.csproj"));
        create_file(&base.join("Root.sln"));
        fs::create_dir_all(base.join("bin/Debug")).unwrap();

        let built = lister().list_built(base);

        assert_eq!(built.len(), 1);
        assert_eq!(built.as_slice()[0].name(), "A");
        assert_eq!(built.as_slice()[0].path(), PathBuf::from("A/A.csproj"));
    }

    #[test]
    fn test_empty_root() {
        let tmp = TempDir::new().unwrap();

        assert!(lister().list_all(tmp.path()).is_empty());
        assert!(lister().list_built(tmp.path()).is_empty());
    }
}
