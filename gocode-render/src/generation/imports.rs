//! Import resolution and import block assembly.

use indexmap::IndexMap;
use tracing::trace;

use crate::builder::{CodeFragment, Statement, value::quote};

/// Resolves qualified names to local package names and tracks every import
/// path referenced while rendering.
///
/// Two modes exist:
///
/// - standalone: used when rendering a single node on its own. Nothing is
///   recorded; a qualified name uses its alias, or the full import path when
///   there is none.
/// - file: used when rendering a whole file. Names are resolved to unique
///   local package names and every path is recorded for the import block.
///
/// # Example
///
/// ```
/// use gocode_render::generation::ImportSet;
///
/// let mut imports = ImportSet::for_file();
/// assert_eq!(imports.qualify("github.com/pkg/errors", None), "errors");
/// assert_eq!(imports.qualify("errors", None), "errors1");
/// assert_eq!(imports.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    tracking: bool,
    /// Path -> alias directives applied before any other naming rule.
    aliases: IndexMap<String, String>,
    /// Path -> local name, in first-use order.
    used: IndexMap<String, String>,
}

impl ImportSet {
    /// Create a resolver for standalone fragment rendering.
    pub fn standalone() -> Self {
        Self::default()
    }

    /// Create a resolver for whole-file rendering.
    pub fn for_file() -> Self {
        Self {
            tracking: true,
            ..Self::default()
        }
    }

    /// Force `path` to be referenced through `alias`.
    pub fn alias(&mut self, path: impl Into<String>, alias: impl Into<String>) {
        self.aliases.insert(path.into(), alias.into());
    }

    /// Add several alias directives.
    pub fn aliases<P, A>(&mut self, aliases: impl IntoIterator<Item = (P, A)>)
    where
        P: Into<String>,
        A: Into<String>,
    {
        for (path, alias) in aliases {
            self.alias(path, alias);
        }
    }

    /// Resolve the local name used to reference `path`.
    pub fn qualify(&mut self, path: &str, alias: Option<&str>) -> String {
        let requested = self
            .aliases
            .get(path)
            .map(String::as_str)
            .or(alias.filter(|a| !a.is_empty()));

        if !self.tracking {
            return requested.unwrap_or(path).to_string();
        }

        if let Some(local) = self.used.get(path) {
            return local.clone();
        }

        let base = requested
            .map(str::to_string)
            .unwrap_or_else(|| guess_package_name(path));
        let local = self.unique_name(&base);
        trace!(path, local = %local, "resolved import");
        self.used.insert(path.to_string(), local.clone());
        local
    }

    /// Record `path` as used even if nothing references it.
    pub fn require(&mut self, path: &str, alias: Option<&str>) {
        self.qualify(path, alias);
    }

    fn unique_name(&self, base: &str) -> String {
        let taken = |name: &str| self.used.values().any(|v| v == name);
        if !taken(base) {
            return base.to_string();
        }
        let mut i = 1;
        loop {
            let candidate = format!("{}{}", base, i);
            if !taken(&candidate) {
                return candidate;
            }
            i += 1;
        }
    }

    /// Iterate over recorded imports as `(path, local name)`, sorted by path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut entries: Vec<_> = self
            .used
            .iter()
            .map(|(path, local)| (path.as_str(), local.as_str()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }

    /// Check if a path has been recorded.
    pub fn contains(&self, path: &str) -> bool {
        self.used.contains_key(path)
    }

    /// Check if no import has been recorded.
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Get the number of recorded imports.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Build the import declaration for every recorded path.
    ///
    /// Returns `None` when nothing was recorded. A single import renders on
    /// one line, several render as a parenthesized block. The local name is
    /// written unless it is the last path segment, since a guessed name may
    /// not match the package clause of `gopkg.in/yaml.v3` or `.../v8`.
    pub fn to_fragments(&self) -> Option<Vec<CodeFragment>> {
        let mut specs: Vec<String> = self
            .iter()
            .map(|(path, local)| {
                if local == last_segment(path) {
                    quote(path)
                } else {
                    format!("{} {}", local, quote(path))
                }
            })
            .collect();

        match specs.len() {
            0 => None,
            1 => Some(vec![CodeFragment::line(format!("import {}", specs.remove(0)))]),
            _ => Some(vec![CodeFragment::block(
                "import (",
                specs.into_iter().map(CodeFragment::line).collect(),
                Some(Statement::text(")")),
            )]),
        }
    }
}

/// Guess the package name Go code would use for an import path.
///
/// Takes the last path segment, falling back to the previous one for a
/// major-version suffix (`/v2`). Strips `go-` prefixes and `-go`/`.go`
/// suffixes and anything that cannot appear in an identifier.
pub fn guess_package_name(path: &str) -> String {
    let mut segments = path.rsplit('/').filter(|s| !s.is_empty());
    let mut last = segments.next().unwrap_or(path);
    if is_major_version(last) {
        if let Some(previous) = segments.next() {
            last = previous;
        }
    }

    let trimmed = last.strip_prefix("go-").unwrap_or(last);
    let trimmed = trimmed
        .strip_suffix("-go")
        .or_else(|| trimmed.strip_suffix(".go"))
        .unwrap_or(trimmed);

    let name: String = trimmed
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .flat_map(char::to_lowercase)
        .collect();

    match name.chars().next() {
        None => "pkg".to_string(),
        Some(c) if c.is_ascii_digit() => format!("pkg{}", name),
        Some(_) => name,
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').find(|s| !s.is_empty()).unwrap_or(path)
}

fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_package_name() {
        assert_eq!(guess_package_name("fmt"), "fmt");
        assert_eq!(guess_package_name("net/http"), "http");
        assert_eq!(guess_package_name("github.com/go-kit/kit/v2"), "kit");
        assert_eq!(guess_package_name("github.com/x/go-yaml"), "yaml");
        assert_eq!(guess_package_name("github.com/x/redis-go"), "redis");
        assert_eq!(guess_package_name("gopkg.in/yaml.v3"), "yamlv3");
        assert_eq!(guess_package_name("example.com/My-Pkg"), "mypkg");
    }

    #[test]
    fn test_standalone_does_not_record() {
        let mut imports = ImportSet::standalone();
        assert_eq!(imports.qualify("test/abc", Some("abc")), "abc");
        assert_eq!(imports.qualify("test/abc", None), "test/abc");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_alias_directive_wins() {
        let mut imports = ImportSet::for_file();
        imports.alias("github.com/pkg/errors", "pkgerrors");
        assert_eq!(
            imports.qualify("github.com/pkg/errors", Some("errs")),
            "pkgerrors"
        );

        let mut standalone = ImportSet::standalone();
        standalone.alias("github.com/pkg/errors", "pkgerrors");
        assert_eq!(standalone.qualify("github.com/pkg/errors", None), "pkgerrors");
    }

    #[test]
    fn test_first_resolution_is_stable() {
        let mut imports = ImportSet::for_file();
        assert_eq!(imports.qualify("test/abc", Some("x")), "x");
        assert_eq!(imports.qualify("test/abc", Some("y")), "x");
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_required_import_sets_local_name() {
        let mut imports = ImportSet::for_file();
        imports.require("fmt", Some("f"));
        imports.require("os", None);
        assert_eq!(imports.qualify("fmt", None), "f");
        assert_eq!(render_block(&imports), "import (\n\tf \"fmt\"\n\t\"os\"\n)\n");
    }

    #[test]
    fn test_name_collisions_get_suffix() {
        let mut imports = ImportSet::for_file();
        assert_eq!(imports.qualify("a/errors", None), "errors");
        assert_eq!(imports.qualify("b/errors", None), "errors1");
        assert_eq!(imports.qualify("c/errors", None), "errors2");
    }

    #[test]
    fn test_single_import_fragment() {
        let mut imports = ImportSet::for_file();
        imports.qualify("fmt", None);
        let fragments = imports.to_fragments().unwrap();
        assert_eq!(fragments, vec![CodeFragment::line("import \"fmt\"")]);
    }

    #[test]
    fn test_guessed_names_are_written_out() {
        let mut imports = ImportSet::for_file();
        assert_eq!(imports.qualify("gopkg.in/yaml.v3", None), "yamlv3");
        assert_eq!(imports.qualify("github.com/go-redis/redis/v8", None), "redis");
        assert_eq!(imports.qualify("net/http", None), "http");

        insta::assert_snapshot!(render_block(&imports), @r#"
import (
	redis "github.com/go-redis/redis/v8"
	yamlv3 "gopkg.in/yaml.v3"
	"net/http"
)
"#);
    }

    fn render_block(imports: &ImportSet) -> String {
        let mut out = crate::builder::CodeBuilder::go();
        for fragment in imports.to_fragments().unwrap_or_default() {
            out.apply_fragment(fragment);
        }
        out.build()
    }

    #[test]
    fn test_no_imports_no_fragment() {
        assert!(ImportSet::for_file().to_fragments().is_none());
    }
}
