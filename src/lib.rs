//! # dotnet-mod
//!
//! A thin CLI front end over the `dotnet` toolchain that discovers project and
//! solution manifests in a directory tree, builds them, and reports which
//! projects have build output.
//!
//! This library provides the core functionality for the dotnet-mod CLI tool:
//! manifest scanning, build status detection, module listing and build dispatch.

pub mod config;
pub mod dispatcher;
pub mod lister;
pub mod module;
pub mod scanner;
pub mod status;
pub mod toolchain;
