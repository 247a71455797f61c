//! Module inventory types.
//!
//! This module contains the data structures used to describe the projects and
//! solutions discovered under a scan root, and the collection type used to
//! render them.
//!
//! ## Main Parts
//!
//! - [`ModuleInfo`] - One discovered manifest (name, kind, relative path, built flag)
//! - [`ModuleKind`] - Whether a manifest is a project or a solution
//! - [`Modules`] - A collection of modules with display helpers

#[allow(clippy::module_inception)]
pub mod module;
pub mod modules;

pub use module::{ModuleInfo, ModuleKind};
pub use modules::Modules;
