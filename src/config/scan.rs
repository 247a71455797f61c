//! Scanning configuration.

/// Configuration for manifest discovery.
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// Report directory access errors met while walking the tree
    pub verbose: bool,
}
