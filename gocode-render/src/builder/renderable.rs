//! Layout fragments and the trait that produces them.
//!
//! Declarations never write text directly. They describe their layout as a
//! tree of [`CodeFragment`]s, and a [`CodeBuilder`](super::CodeBuilder)
//! decides indentation and how qualified names are spelled.

use super::Statement;

/// One piece of layout.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A statement on its own line.
    Line(Statement),
    /// An empty line.
    Blank,
    /// `header`, then `body` one level deeper, then `close` if present.
    Block {
        header: Statement,
        body: Vec<CodeFragment>,
        close: Option<Statement>,
    },
    /// Fragments one level deeper, with no header or closing line.
    Indent(Vec<CodeFragment>),
    /// Fragments at the current level.
    Sequence(Vec<CodeFragment>),
    /// `// text`, one comment line per line of text.
    Comment(String),
}

impl CodeFragment {
    pub fn line(stmt: impl Into<Statement>) -> Self {
        Self::Line(stmt.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn block(
        header: impl Into<Statement>,
        body: Vec<CodeFragment>,
        close: Option<Statement>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn indent(body: Vec<CodeFragment>) -> Self {
        Self::Indent(body)
    }

    pub fn sequence(items: Vec<CodeFragment>) -> Self {
        Self::Sequence(items)
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }
}

impl From<Statement> for CodeFragment {
    fn from(stmt: Statement) -> Self {
        Self::Line(stmt)
    }
}

/// A node that can describe its layout.
pub trait Renderable {
    /// The layout of this node, top to bottom.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        T::to_fragments(self)
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        T::to_fragments(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_from_text_and_statement() {
        assert_eq!(
            CodeFragment::line("x := 1"),
            CodeFragment::from(Statement::text("x := 1"))
        );
        assert_eq!(
            CodeFragment::comment("hi"),
            CodeFragment::Comment("hi".into())
        );
    }

    #[test]
    fn test_block_parts() {
        let CodeFragment::Block {
            header,
            body,
            close,
        } = CodeFragment::block("for {", vec![CodeFragment::line("break")], None)
        else {
            panic!("not a block");
        };
        assert_eq!(header, Statement::text("for {"));
        assert_eq!(body, [CodeFragment::line("break")]);
        assert!(close.is_none());
    }

    #[test]
    fn test_boxed_node() {
        struct Decl;
        impl Renderable for Decl {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::blank()]
            }
        }

        let boxed: Box<dyn Renderable> = Box::new(Decl);
        assert_eq!(boxed.to_fragments(), [CodeFragment::Blank]);
    }
}
