//! Collection management for discovered modules.
//!
//! This module provides the `Modules` struct which wraps the inventory produced
//! by the lister and knows how to print it as a human-readable block.

use colored::Colorize;

use super::{ModuleInfo, ModuleKind};

/// A collection of discovered modules.
#[derive(Clone, Debug, Default)]
pub struct Modules(Vec<ModuleInfo>);

impl From<Vec<ModuleInfo>> for Modules {
    fn from(modules: Vec<ModuleInfo>) -> Self {
        Self(modules)
    }
}

impl IntoIterator for Modules {
    type Item = ModuleInfo;
    type IntoIter = std::vec::IntoIter<ModuleInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Modules {
    type Item = &'a ModuleInfo;
    type IntoIter = std::slice::Iter<'a, ModuleInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Modules {
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ModuleInfo] {
        &self.0
    }

    /// Number of modules reported as built.
    #[must_use]
    pub fn built_count(&self) -> usize {
        self.0.iter().filter(|m| m.is_built()).count()
    }

    /// Number of modules of the given kind.
    #[must_use]
    pub fn count_of(&self, kind: ModuleKind) -> usize {
        self.0.iter().filter(|m| m.kind() == kind).count()
    }

    /// Print the collection under a bold title.
    ///
    /// An empty collection prints a single "no modules found" notice instead.
    ///
    /// # Output Format
    ///
    /// ```text
    /// 📋 Modules:
    ///   📦 Api [Project] src/Api/Api.csproj ✅ built
    ///   🗂️ Shop [Solution] Shop.sln
    ///   📊 2 modules (1 project, 1 solution), 1 built
    /// ```
    pub fn print_listing(&self, title: &str) {
        if self.is_empty() {
            println!("{}", "✨ No modules found!".yellow());
            return;
        }

        println!("\n{}", title.bold());

        for module in &self.0 {
            println!("  {module}");
        }

        println!("  📊 {}", self.summary_line());
    }

    /// Summary such as `3 modules (2 projects, 1 solution), 1 built`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "{} ({}, {}), {} built",
            pluralize(self.len(), "module"),
            pluralize(self.count_of(ModuleKind::Project), "project"),
            pluralize(self.count_of(ModuleKind::Solution), "solution"),
            self.built_count()
        )
    }
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
