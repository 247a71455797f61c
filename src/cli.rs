use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dotnet_mod::config::{
    BuildOptions, FileConfig, ListOptions, ModuleSelector, ScanOptions, file::expand_tilde,
};

/// Flags shared by every subcommand.
#[derive(Args, Debug)]
pub(crate) struct BaseArgs {
    /// Stream toolchain output and report directory access errors
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// The directory to search for projects and solutions
    #[arg(short = 'd', long, global = true)]
    directory: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct BuildArgs {
    /// Build every project whose name contains NAME (case-insensitive)
    #[arg(short = 'm', long, value_name = "NAME")]
    module: Option<String>,

    /// Build every project in the tree and every top-level solution
    #[arg(short = 'a', long)]
    all: bool,

    /// Run `dotnet clean` before each build
    #[arg(short = 'c', long)]
    clean: bool,

    /// Build with the Release configuration instead of Debug
    #[arg(short = 'r', long)]
    release: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    /// List every project and solution (default)
    #[arg(short = 'm', long)]
    modules: bool,

    /// List only projects that have build output
    #[arg(short = 'b', long)]
    built: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Build the current solution/project, a named module, or everything
    Build(BuildArgs),

    /// List discovered modules and their build status
    List(ListArgs),
}

#[derive(Parser, Debug)]
#[command(name = "dotnet-mod", version)]
#[command(about = "Discover, build and list .NET projects and solutions in a directory tree")]
pub(crate) struct Cli {
    #[command(flatten)]
    base: BaseArgs,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

impl Cli {
    /// Directory to scan: `--directory`, then the config file, then `.`.
    pub(crate) fn directory(&self, config: &FileConfig) -> PathBuf {
        self.base
            .directory
            .clone()
            .or_else(|| config.dir.as_deref().map(expand_tilde))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub(crate) fn verbose(&self, config: &FileConfig) -> bool {
        self.base.verbose || config.verbose.unwrap_or(false)
    }

    pub(crate) fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        ScanOptions {
            verbose: self.verbose(config),
        }
    }
}

impl BuildArgs {
    /// Clean and Release are taken from the flags alone; the config file
    /// never changes what a plain `build` does.
    pub(crate) fn build_options(&self, verbose: bool) -> BuildOptions {
        BuildOptions {
            selector: ModuleSelector::from_flags(self.all, self.module.clone()),
            clean: self.clean,
            release: self.release,
            verbose,
        }
    }
}

impl ListArgs {
    pub(crate) const fn list_options(&self) -> ListOptions {
        ListOptions::from_flags(self.modules, self.built)
    }
}
