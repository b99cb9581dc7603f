//! Package imports.

use std::hash::{Hash, Hasher};

use gocode_render::{CodeFragment, Renderable, builder::value::quote};

use super::Code;

/// A package import referenced by qualified types.
///
/// Identity is `(alias, path)`. The optional file path records where the
/// package lives on disk for callers that load packages; it is never
/// rendered and does not take part in equality.
#[derive(Debug, Clone)]
pub struct Import {
    alias: Option<String>,
    path: String,
    file_path: Option<String>,
}

impl Import {
    /// Create an import without an alias.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            alias: None,
            path: path.into(),
            file_path: None,
        }
    }

    /// Create an import referenced through `alias`.
    pub fn with_alias(alias: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(path).alias(alias)
    }

    /// Set the alias. An empty alias means no alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        self.alias = (!alias.is_empty()).then_some(alias);
        self
    }

    /// Record where the package lives on disk.
    pub fn file_path(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.file_path.as_deref()
    }
}

impl PartialEq for Import {
    fn eq(&self, other: &Self) -> bool {
        self.alias == other.alias && self.path == other.path
    }
}

impl Eq for Import {}

impl Hash for Import {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.alias.hash(state);
        self.path.hash(state);
    }
}

/// A single import declaration, `import alias "path"`.
impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let line = match &self.alias {
            Some(alias) => format!("import {} {}", alias, quote(&self.path)),
            None => format!("import {}", quote(&self.path)),
        };
        vec![CodeFragment::line(line)]
    }
}

impl Code for Import {}

display_via_render!(Import);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_import() {
        let import = Import::with_alias("code", "github.com/go-services/code");
        assert_eq!(import.alias_name(), Some("code"));
        assert_eq!(import.path(), "github.com/go-services/code");
        assert_eq!(import.location(), None);
    }

    #[test]
    fn test_import_render() {
        assert_eq!(Import::new("fmt").render(), "import \"fmt\"");
        assert_eq!(
            Import::with_alias("errs", "github.com/pkg/errors").render(),
            "import errs \"github.com/pkg/errors\""
        );
    }

    #[test]
    fn test_empty_alias_is_none() {
        assert_eq!(Import::with_alias("", "fmt").alias_name(), None);
    }

    #[test]
    fn test_file_path_ignored_by_identity() {
        let a = Import::with_alias("code", "github.com/go-services/code")
            .file_path("path/to/go/root/src/github.com/go-services/code");
        let b = Import::with_alias("code", "github.com/go-services/code");
        assert_eq!(a, b);
        assert_eq!(
            a.location(),
            Some("path/to/go/root/src/github.com/go-services/code")
        );
        assert_ne!(a, Import::new("github.com/go-services/code"));
    }
}
