//! Configuration types and options for the application.
//!
//! This module contains all configuration structures used throughout the application,
//! including scanning, listing and build options, and the persistent config file.

pub mod build;
pub mod file;
pub mod list;
pub mod scan;

pub use build::{BuildOptions, Configuration, ModuleSelector};
pub use file::FileConfig;
pub use list::ListOptions;
pub use scan::ScanOptions;
