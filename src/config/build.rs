//! Build configuration for the `build` subcommand.
//!
//! This module defines which manifests a build run targets and how the
//! toolchain is asked to build them.

use std::fmt::{Display, Formatter, Result};

/// Which manifests a build run targets.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ModuleSelector {
    /// Every project in the tree plus every top-level solution
    All,

    /// Every project whose name contains the given text (case-insensitive)
    Named(String),

    /// The first top-level solution, or else the first top-level project
    #[default]
    Current,
}

impl ModuleSelector {
    /// Resolve the raw CLI flags into a selector.
    ///
    /// `--all` takes precedence over `--module`, which takes precedence over
    /// the current-directory default.
    #[must_use]
    pub fn from_flags(all: bool, module: Option<String>) -> Self {
        if all {
            Self::All
        } else if let Some(name) = module {
            Self::Named(name)
        } else {
            Self::Current
        }
    }
}

/// Build configuration passed to the toolchain with `-c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Configuration {
    #[default]
    Debug,
    Release,
}

impl Configuration {
    #[must_use]
    pub const fn from_release(release: bool) -> Self {
        if release { Self::Release } else { Self::Debug }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
        }
    }
}

impl Display for Configuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

/// Options for a single build run.
#[derive(Clone, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct BuildOptions {
    /// Which manifests to build
    pub selector: ModuleSelector,

    /// Run the toolchain's clean step before each build
    pub clean: bool,

    /// Build with the Release configuration instead of Debug
    pub release: bool,

    /// Stream the toolchain's output to the terminal
    pub verbose: bool,
}

impl BuildOptions {
    #[must_use]
    pub const fn configuration(&self) -> Configuration {
        Configuration::from_release(self.release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_all_wins() {
        let selector = ModuleSelector::from_flags(true, Some("Api".to_string()));
        assert_eq!(selector, ModuleSelector::All);
    }

    #[test]
    fn test_selector_named() {
        let selector = ModuleSelector::from_flags(false, Some("Api".to_string()));
        assert_eq!(selector, ModuleSelector::Named("Api".to_string()));
    }

    #[test]
    fn test_selector_default_is_current() {
        assert_eq!(ModuleSelector::from_flags(false, None), ModuleSelector::Current);
        assert_eq!(ModuleSelector::default(), ModuleSelector::Current);
    }

    #[test]
    fn test_configuration_from_release() {
        assert_eq!(Configuration::from_release(true), Configuration::Release);
        assert_eq!(Configuration::from_release(false), Configuration::Debug);
        assert_eq!(Configuration::Release.to_string(), "Release");
        assert_eq!(Configuration::Debug.as_str(), "Debug");
    }

    #[test]
    fn test_build_options_configuration() {
        let options = BuildOptions {
            release: true,
            ..BuildOptions::default()
        };

        assert_eq!(options.configuration(), Configuration::Release);
        assert_eq!(BuildOptions::default().configuration(), Configuration::Debug);
    }
}
