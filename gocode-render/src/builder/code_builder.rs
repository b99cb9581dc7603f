//! Line writer that lays out fragments with Go indentation.

use super::{CodeFragment, Indent, Renderable, Statement};
use crate::generation::ImportSet;

/// Writes Go source line by line at a tracked nesting depth.
///
/// Qualified names inside emitted statements are resolved through the
/// builder's [`ImportSet`], so the same fragments render with full import
/// paths standalone and with local package names inside a file.
///
/// # Example
///
/// ```
/// use gocode_render::builder::CodeBuilder;
///
/// let mut out = CodeBuilder::go();
/// out.push_line("if err != nil {")
///     .push_indent()
///     .push_line("return err")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(out.build(), "if err != nil {\n\treturn err\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    depth: usize,
    indent: Indent,
    out: String,
    imports: ImportSet,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            depth: 0,
            indent,
            out: String::new(),
            imports: ImportSet::standalone(),
        }
    }

    /// A builder indenting with tabs, as gofmt does.
    pub fn go() -> Self {
        Self::new(Indent::GO)
    }

    /// Resolve qualified names through `imports` instead of the standalone
    /// resolver.
    pub fn with_imports(mut self, imports: ImportSet) -> Self {
        self.imports = imports;
        self
    }

    /// Write `text` as one line at the current depth.
    pub fn push_line(&mut self, text: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.out.push_str(self.indent.as_str());
        }
        self.out.push_str(text);
        self.out.push('\n');
        self
    }

    /// Resolve a statement's qualified names and write it as one line.
    pub fn push_statement(&mut self, stmt: &Statement) -> &mut Self {
        let text = stmt.render(&mut self.imports);
        self.push_line(&text)
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    /// Append already laid-out text as is.
    pub fn push_raw(&mut self, text: &str) -> &mut Self {
        self.out.push_str(text);
        self
    }

    pub fn push_indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn push_dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Write `// ` comment lines, a bare `//` for empty lines.
    pub fn push_comment(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self.push_line("//");
        }
        for line in text.lines() {
            match line {
                "" => self.push_line("//"),
                line => self.push_line(&format!("// {}", line)),
            };
        }
        self
    }

    /// Lay out everything a node produces.
    pub fn emit<R: Renderable + ?Sized>(&mut self, node: &R) -> &mut Self {
        self.apply_all(node.to_fragments());
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(stmt) => {
                self.push_statement(&stmt);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Comment(text) => {
                self.push_comment(&text);
            }
            CodeFragment::Sequence(items) => self.apply_all(items),
            CodeFragment::Indent(body) => self.nested(body),
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_statement(&header);
                self.nested(body);
                if let Some(close) = close {
                    self.push_statement(&close);
                }
            }
        }
    }

    pub fn indent_style(&self) -> Indent {
        self.indent
    }

    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn build(self) -> String {
        self.out
    }

    /// The written text together with every import it resolved.
    pub fn finish(self) -> (String, ImportSet) {
        (self.out, self.imports)
    }

    fn apply_all(&mut self, fragments: Vec<CodeFragment>) {
        for fragment in fragments {
            self.apply_fragment(fragment);
        }
    }

    fn nested(&mut self, body: Vec<CodeFragment>) {
        self.depth += 1;
        self.apply_all(body);
        self.depth -= 1;
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::go()
    }
}

/// Render a node on its own, without the trailing line break.
///
/// Qualified names resolve to their alias or their full import path.
pub fn render_standalone<R: Renderable + ?Sized>(node: &R) -> String {
    let mut out = CodeBuilder::go();
    out.emit(node);
    trim_last_newline(out.build())
}

/// Render a node as it appears one level inside a container, then strip the
/// container's indentation unit.
///
/// Member nodes (struct fields, interface methods) use this so their
/// standalone text is identical to their text inside the parent block.
pub fn render_member<R: Renderable + ?Sized>(node: &R) -> String {
    let mut out = CodeBuilder::go();
    out.apply_fragment(CodeFragment::indent(node.to_fragments()));
    let unit = out.indent_style();
    trim_last_newline(unit.strip_unit(&out.build()))
}

fn trim_last_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_line_at_depth() {
        let mut out = CodeBuilder::new(Indent::Spaces(2));
        out.push_line("switch x {")
            .push_line("case 1:")
            .push_indent()
            .push_line("return")
            .push_dedent()
            .push_line("}");
        assert_eq!(out.build(), "switch x {\ncase 1:\n  return\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut out = CodeBuilder::go();
        out.push_dedent().push_line("x");
        assert_eq!(out.build(), "x\n");
    }

    #[test]
    fn test_comment_lines() {
        let mut out = CodeBuilder::go();
        out.push_comment("first\n\nsecond").push_comment("");
        assert_eq!(out.build(), "// first\n//\n// second\n//\n");
    }

    #[test]
    fn test_nested_blocks() {
        struct Loop;
        impl Renderable for Loop {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "for _, v := range vs {",
                    vec![CodeFragment::block(
                        "if v {",
                        vec![CodeFragment::line("continue")],
                        Some(Statement::text("}")),
                    )],
                    Some(Statement::text("}")),
                )]
            }
        }

        let mut out = CodeBuilder::go();
        out.emit(&Loop);
        assert_eq!(
            out.build(),
            "for _, v := range vs {\n\tif v {\n\t\tcontinue\n\t}\n}\n"
        );
    }

    #[test]
    fn test_file_imports_are_recorded() {
        let mut out = CodeBuilder::go().with_imports(ImportSet::for_file());
        out.push_statement(&Statement::text("var err ").push_qual("errors", None, "Error"));
        let (code, imports) = out.finish();
        assert_eq!(code, "var err errors.Error\n");
        assert!(imports.contains("errors"));
    }

    #[test]
    fn test_render_member_matches_container() {
        struct Member;
        impl Renderable for Member {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![
                    CodeFragment::comment("doc"),
                    CodeFragment::line("Name string"),
                ]
            }
        }

        assert_eq!(render_member(&Member), "// doc\nName string");
        assert_eq!(render_standalone(&Member), "// doc\nName string");
    }
}
