//! Build dispatch.
//!
//! The dispatcher resolves a [`ModuleSelector`] into a list of manifests and
//! runs the toolchain over them one at a time, in discovery order. The first
//! failing command aborts the whole run; later manifests are not touched.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config::{BuildOptions, ModuleSelector},
    scanner::{ManifestScope, Scanner},
    toolchain::{CommandRunner, ToolchainResult, build_args, clean_args},
};

/// Runs clean/build steps for the selected manifests.
pub struct Dispatcher<R: CommandRunner> {
    scanner: Scanner,
    runner: R,

    /// When `true`, suppresses the progress spinner.
    quiet: bool,
}

impl<R: CommandRunner> Dispatcher<R> {
    #[must_use]
    pub fn new(scanner: Scanner, runner: R) -> Self {
        Self {
            scanner,
            runner,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses the progress spinner).
    #[must_use]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolve `selector` into the manifests it targets under `root`.
    pub fn resolve(&self, root: &Path, selector: &ModuleSelector) -> Vec<PathBuf> {
        match selector {
            ModuleSelector::All => self.scanner.scan(root, ManifestScope::AllProjects),
            ModuleSelector::Named(name) => {
                let needle = name.to_lowercase();

                self.scanner
                    .project_manifests(root, ManifestScope::AllProjects)
                    .into_iter()
                    .filter(|manifest| {
                        manifest
                            .file_stem()
                            .is_some_and(|stem| stem.to_string_lossy().to_lowercase().contains(&needle))
                    })
                    .collect()
            }
            ModuleSelector::Current => self
                .scanner
                .solution_manifests(root)
                .into_iter()
                .next()
                .or_else(|| {
                    self.scanner
                        .project_manifests(root, ManifestScope::TopLevelOnly)
                        .into_iter()
                        .next()
                })
                .into_iter()
                .collect(),
        }
    }

    /// Clean (optionally) and build every manifest selected by `options`.
    ///
    /// Returns the number of manifests built. Finding nothing is not an
    /// error: a notice is printed and `Ok(0)` returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::toolchain::ToolchainError`] raised by the
    /// toolchain. No further manifests are processed after a failure.
    pub fn dispatch(&self, root: &Path, options: &BuildOptions) -> ToolchainResult<usize> {
        let manifests = self.resolve(root, &options.selector);

        if manifests.is_empty() {
            match &options.selector {
                ModuleSelector::Named(name) => println!(
                    "{}",
                    format!("✨ No modules match '{name}'").yellow()
                ),
                ModuleSelector::All | ModuleSelector::Current => {
                    println!("{}", "✨ No projects or solutions found!".yellow());
                }
            }
            return Ok(0);
        }

        let configuration = options.configuration();

        for manifest in &manifests {
            let label = manifest
                .strip_prefix(root)
                .unwrap_or(manifest)
                .display()
                .to_string();

            if options.clean {
                self.run_step(&format!("Cleaning {label}"), &clean_args(manifest), options.verbose)?;
            }

            self.run_step(
                &format!("Building {label} ({configuration})"),
                &build_args(manifest, configuration),
                options.verbose,
            )?;

            println!("  {} {}", "✅".green(), label.bright_white());
        }

        Ok(manifests.len())
    }

    /// Run one toolchain step. Only success matters here, so the
    /// [`crate::toolchain::CommandOutput`] of a passing step is dropped.
    fn run_step(&self, message: &str, args: &[String], verbose: bool) -> ToolchainResult<()> {
        if verbose {
            println!("{} {}", "🔨".cyan(), message.bold());
            self.runner.run(args, true)?;
            return Ok(());
        }

        let progress = self.spinner(message);
        let result = self.runner.run(args, false);
        progress.finish_and_clear();
        result?;

        Ok(())
    }

    fn spinner(&self, message: &str) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}
