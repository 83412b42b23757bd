// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator configuration.
//!
//! Per-entity `#[dao(...)]` options win over these values.

use syn::Visibility;

/// Page size used when a search is called without `max_results`.
pub const DEFAULT_MAX_RESULTS: u32 = 1000;

/// Configuration for [`crate::Generator`] and [`crate::assemble::expand`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    prefix:           String,
    max_results:      u32,
    module_name:      Option<String>,
    module_namespace: Vec<String>,
    module_vis:       Visibility
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prefix:           String::new(),
            max_results:      DEFAULT_MAX_RESULTS,
            module_name:      None,
            module_namespace: Vec::new(),
            module_vis:       syn::parse_quote!(pub)
        }
    }
}

impl GeneratorConfig {
    /// Configuration with defaults: no prefix, page size 1000, no module.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix for DAO names when the entity does not set one.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Page size when the entity does not set one.
    #[must_use]
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Emit a module type with this name.
    #[must_use]
    pub fn module(mut self, name: impl Into<String>) -> Self {
        self.module_name = Some(name.into());
        self
    }

    /// Module path of the emitted module type.
    #[must_use]
    pub fn module_namespace<I, S>(mut self, namespace: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.module_namespace = namespace.into_iter().map(Into::into).collect();
        self
    }

    /// Visibility of the emitted module type.
    #[must_use]
    pub fn module_vis(mut self, vis: Visibility) -> Self {
        self.module_vis = vis;
        self
    }

    /// Configured DAO name prefix.
    #[must_use]
    pub fn default_prefix(&self) -> &str {
        &self.prefix
    }

    /// Configured page size.
    #[must_use]
    pub const fn default_max_results(&self) -> u32 {
        self.max_results
    }

    /// Module type name, if a module is requested.
    #[must_use]
    pub fn module_name(&self) -> Option<&str> {
        self.module_name.as_deref()
    }

    /// Module path of the module type.
    #[must_use]
    pub fn module_path(&self) -> &[String] {
        &self.module_namespace
    }

    /// Visibility of the module type.
    #[must_use]
    pub const fn visibility(&self) -> &Visibility {
        &self.module_vis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GeneratorConfig::new();
        assert_eq!(config.default_prefix(), "");
        assert_eq!(config.default_max_results(), 1000);
        assert!(config.module_name().is_none());
        assert!(config.module_path().is_empty());
    }

    #[test]
    fn builder_overrides() {
        let config = GeneratorConfig::new()
            .prefix("Brahma")
            .max_results(50)
            .module("DaoModule")
            .module_namespace(["app", "dao"]);
        assert_eq!(config.default_prefix(), "Brahma");
        assert_eq!(config.default_max_results(), 50);
        assert_eq!(config.module_name(), Some("DaoModule"));
        assert_eq!(config.module_path(), ["app".to_owned(), "dao".to_owned()]);
    }
}
