//! # dotnet-mod
//!
//! A small CLI that finds .NET projects (`.csproj`, `.fsproj`, `.vbproj`) and
//! solutions (`.sln`, `.slnx`) under a directory, builds them with `dotnet`,
//! and lists which ones are built.
//!
//! ## Usage
//!
//! ```bash
//! # Build the solution (or project) in the current directory
//! dotnet-mod build
//!
//! # Clean and build every project matching "api" in Release
//! dotnet-mod build --module api --clean --release
//!
//! # Show every module, then only the built ones
//! dotnet-mod list --modules --built -d ~/src/shop
//! ```

mod cli;

use anyhow::{Result, bail};
use clap::{Parser, error::ErrorKind};
use cli::{Cli, Commands};
use colored::Colorize;
use dotnet_mod::{
    config::FileConfig, dispatcher::Dispatcher, lister::Lister, scanner::Scanner,
    toolchain::ProcessRunner,
};
use std::process::exit;

/// Entry point for the dotnet-mod application.
///
/// Help and version requests exit with status 0; any other argument error,
/// and any error returned by [`inner_main`], exits with status 1.
fn main() {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            exit(code);
        }
    };

    if let Err(err) = inner_main(&args) {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// This function can return errors if:
/// - The target directory does not exist
/// - A `dotnet clean` or `dotnet build` command fails or cannot be started
fn inner_main(args: &Cli) -> Result<()> {
    let file_config = FileConfig::load().unwrap_or_else(|e| {
        eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
        FileConfig::default()
    });

    let dir = args.directory(&file_config);
    if !dir.is_dir() {
        bail!("Directory not found: {}", dir.display());
    }

    let verbose = args.verbose(&file_config);
    let scanner = Scanner::new(args.scan_options(&file_config));

    match &args.command {
        Commands::List(list_args) => {
            Lister::new(scanner).print(&dir, list_args.list_options());
        }
        Commands::Build(build_args) => {
            let options = build_args.build_options(verbose);
            let dispatcher = Dispatcher::new(scanner, ProcessRunner::default());

            match dispatcher.dispatch(&dir, &options) {
                Ok(0) => {}
                Ok(built) => println!(
                    "\n{} {}",
                    "🎉 Build complete!".green(),
                    format!("Built {built} module(s)").bright_white()
                ),
                Err(err) => {
                    if let Some(output) = err.captured_output() {
                        eprintln!("{output}");
                    }
                    return Err(err.into());
                }
            }
        }
    }

    Ok(())
}
