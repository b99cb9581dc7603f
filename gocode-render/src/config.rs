//! Render configuration.
//!
//! ```toml
//! indent = "tab"
//! header = "Code generated by gocode. DO NOT EDIT."
//!
//! [import-aliases]
//! "github.com/pkg/errors" = "pkgerrors"
//! ```

use std::str::FromStr;

use eyre::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::{builder::Indent, generation::ImportSet};

/// Options controlling how files are rendered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct RenderConfig {
    /// Indentation style.
    pub indent: Indent,
    /// Comment emitted above the package clause.
    pub header: Option<String>,
    /// Import path -> local package name.
    pub import_aliases: IndexMap<String, String>,
}

impl RenderConfig {
    /// Create the default configuration (tabs, no header, no aliases).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation style.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Set the header comment.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add an import alias.
    pub fn import_alias(mut self, path: impl Into<String>, alias: impl Into<String>) -> Self {
        self.import_aliases.insert(path.into(), alias.into());
        self
    }

    /// Parse a configuration from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).wrap_err("failed to parse render configuration")
    }

    /// Build a file import resolver carrying the configured aliases.
    pub fn import_set(&self) -> ImportSet {
        let mut imports = ImportSet::for_file();
        imports.aliases(self.import_aliases.iter().map(|(p, a)| (p.as_str(), a.as_str())));
        imports
    }
}

impl FromStr for RenderConfig {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = RenderConfig::from_toml_str("").unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.indent, Indent::Tab);
    }

    #[test]
    fn test_full_config() {
        let config: RenderConfig = r#"
            indent = 4
            header = "Code generated. DO NOT EDIT."

            [import-aliases]
            "github.com/pkg/errors" = "pkgerrors"
        "#
        .parse()
        .unwrap();

        assert_eq!(config.indent, Indent::Spaces(4));
        assert_eq!(config.header.as_deref(), Some("Code generated. DO NOT EDIT."));
        assert_eq!(
            config.import_aliases.get("github.com/pkg/errors").map(String::as_str),
            Some("pkgerrors")
        );
    }

    #[test]
    fn test_tab_indent_by_name() {
        let config = RenderConfig::from_toml_str("indent = \"tab\"").unwrap();
        assert_eq!(config.indent, Indent::Tab);
    }

    #[test]
    fn test_rejects_unknown_keys_and_bad_indent() {
        assert!(RenderConfig::from_toml_str("colour = true").is_err());
        assert!(RenderConfig::from_toml_str("indent = \"wide\"").is_err());
        assert!(RenderConfig::from_toml_str("indent = 0").is_err());
    }

    #[test]
    fn test_import_set_applies_aliases() {
        let config = RenderConfig::new().import_alias("github.com/pkg/errors", "pkgerrors");
        let mut imports = config.import_set();
        assert_eq!(imports.qualify("github.com/pkg/errors", None), "pkgerrors");
    }
}
