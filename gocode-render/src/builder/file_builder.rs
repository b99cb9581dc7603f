//! Whole-file assembly.

use tracing::debug;

use super::{CodeBuilder, Indent, Renderable};
use crate::generation::ImportSet;

/// Assembles a complete Go source file: header comment, package clause,
/// import block and top-level declarations separated by blank lines.
///
/// Imports are derived from the qualified names the declarations actually
/// reference, so the body is rendered first and the import block is placed
/// in front of it.
///
/// # Example
///
/// ```
/// use gocode_render::builder::{CodeFragment, FileBuilder, Renderable, Statement};
///
/// struct Decl;
/// impl Renderable for Decl {
///     fn to_fragments(&self) -> Vec<CodeFragment> {
///         vec![CodeFragment::line(
///             Statement::text("var out = ").push_qual("os", None, "Stdout"),
///         )]
///     }
/// }
///
/// let mut file = FileBuilder::new("main");
/// file.add(&Decl);
/// assert_eq!(
///     file.build(),
///     "package main\n\nimport \"os\"\n\nvar out = os.Stdout\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FileBuilder {
    package: String,
    header: Option<String>,
    body: CodeBuilder,
    decls: usize,
}

impl FileBuilder {
    /// Create a new FileBuilder for the given package with tab indentation.
    pub fn new(package: impl Into<String>) -> Self {
        Self::with_indent(package, Indent::GO)
    }

    /// Create a new FileBuilder with custom indentation.
    pub fn with_indent(package: impl Into<String>, indent: Indent) -> Self {
        Self {
            package: package.into(),
            header: None,
            body: CodeBuilder::new(indent).with_imports(ImportSet::for_file()),
            decls: 0,
        }
    }

    /// Use a pre-configured import resolver (e.g. with alias directives).
    ///
    /// Must be called before any declaration is added.
    pub fn imports(mut self, imports: ImportSet) -> Self {
        self.body = self.body.with_imports(imports);
        self
    }

    /// Set a comment emitted above the package clause.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add a top-level declaration. A declaration with no fragments adds
    /// nothing, not even a separating blank line.
    pub fn add<R: Renderable + ?Sized>(&mut self, decl: &R) -> &mut Self {
        let fragments = decl.to_fragments();
        if fragments.is_empty() {
            return self;
        }
        if self.decls > 0 {
            self.body.push_blank();
        }
        for fragment in fragments {
            self.body.apply_fragment(fragment);
        }
        self.decls += 1;
        self
    }

    /// Render the file.
    pub fn build(self) -> String {
        let indent = self.body.indent_style();
        let (body, imports) = self.body.finish();

        let mut out = CodeBuilder::new(indent);
        if let Some(header) = &self.header {
            out.push_comment(header).push_blank();
        }
        out.push_line(&format!("package {}", self.package));

        if let Some(fragments) = imports.to_fragments() {
            out.push_blank();
            for fragment in fragments {
                out.apply_fragment(fragment);
            }
        }

        if !body.is_empty() {
            out.push_blank().push_raw(&body);
        }

        debug!(
            package = %self.package,
            decls = self.decls,
            imports = imports.len(),
            "rendered file"
        );
        out.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{CodeFragment, Statement};

    struct Line(Statement);

    impl Renderable for Line {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::Line(self.0.clone())]
        }
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(FileBuilder::new("demo").build(), "package demo\n");
    }

    #[test]
    fn test_header_comment() {
        let file = FileBuilder::new("demo").header("Code generated. DO NOT EDIT.");
        assert_eq!(
            file.build(),
            "// Code generated. DO NOT EDIT.\n\npackage demo\n"
        );
    }

    #[test]
    fn test_declarations_separated_by_blank_line() {
        let mut file = FileBuilder::new("demo");
        file.add(&Line(Statement::text("var a int")))
            .add(&Line(Statement::text("var b int")));
        assert_eq!(file.build(), "package demo\n\nvar a int\n\nvar b int\n");
    }

    #[test]
    fn test_empty_declaration_adds_no_separator() {
        struct Nothing;
        impl Renderable for Nothing {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                Vec::new()
            }
        }

        let mut file = FileBuilder::new("demo");
        file.add(&Nothing)
            .add(&Line(Statement::text("var a int")))
            .add(&Nothing)
            .add(&Line(Statement::text("var b int")))
            .add(&Nothing);
        assert_eq!(file.build(), "package demo\n\nvar a int\n\nvar b int\n");
    }

    #[test]
    fn test_import_block_sorted_with_aliases() {
        let mut imports = ImportSet::for_file();
        imports.alias("github.com/pkg/errors", "pkgerrors");

        let mut file = FileBuilder::new("demo").imports(imports);
        file.add(&Line(
            Statement::text("var a = ").push_qual("github.com/pkg/errors", None, "New"),
        ))
        .add(&Line(Statement::text("var b = ").push_qual("fmt", None, "Sprint")));

        insta::assert_snapshot!(file.build(), @r#"
package demo

import (
	"fmt"
	pkgerrors "github.com/pkg/errors"
)

var a = pkgerrors.New

var b = fmt.Sprint
"#);
    }
}
