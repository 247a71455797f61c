//! Listing configuration for the `list` subcommand.

/// Which inventory blocks the `list` subcommand prints.
///
/// Both flags may be set; each one produces its own independent block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Print the full inventory of projects and solutions
    pub modules: bool,

    /// Print only the projects that have build output
    pub built: bool,
}

impl ListOptions {
    /// Resolve the raw flags into the blocks to print.
    ///
    /// The full inventory is shown when requested explicitly, or by default
    /// when the built-only view was not requested.
    #[must_use]
    pub const fn from_flags(modules: bool, built: bool) -> Self {
        Self {
            modules: modules || !built,
            built,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_modules() {
        let options = ListOptions::from_flags(false, false);

        assert!(options.modules);
        assert!(!options.built);
    }

    #[test]
    fn test_built_only() {
        let options = ListOptions::from_flags(false, true);

        assert!(!options.modules);
        assert!(options.built);
    }

    #[test]
    fn test_both_blocks() {
        let options = ListOptions::from_flags(true, true);

        assert!(options.modules);
        assert!(options.built);
    }
}
