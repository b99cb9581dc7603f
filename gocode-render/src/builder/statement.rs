//! Statement trees: the token-level intermediate representation.
//!
//! A [`Statement`] is one logical source line made of [`Token`]s. Most tokens
//! are verbatim text; qualified names stay symbolic until rendering so the
//! import set in effect decides which local package name they use.

use super::value::Value;
use crate::generation::ImportSet;

/// A single token of a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Verbatim text: identifiers, keywords, operators, punctuation, spaces.
    Text(String),
    /// A name exported by another package, e.g. `errors.New`.
    Qual {
        /// Import path of the package.
        path: String,
        /// Alias the caller asked for, if any.
        alias: Option<String>,
        /// Exported identifier.
        name: String,
    },
    /// A literal value.
    Lit(Value),
}

/// An ordered sequence of tokens rendering to one line of code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statement {
    tokens: Vec<Token>,
}

impl Statement {
    /// Create an empty statement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a statement holding a single verbatim text token.
    pub fn text(s: impl Into<String>) -> Self {
        Self::new().push_text(s)
    }

    /// Create a statement holding a single qualified name.
    pub fn qual(path: impl Into<String>, alias: Option<String>, name: impl Into<String>) -> Self {
        Self::new().push_qual(path, alias, name)
    }

    /// Append verbatim text.
    pub fn push_text(mut self, s: impl Into<String>) -> Self {
        let s = s.into();
        if s.is_empty() {
            return self;
        }
        // Merge adjacent text so trees stay small and comparable.
        if let Some(Token::Text(last)) = self.tokens.last_mut() {
            last.push_str(&s);
        } else {
            self.tokens.push(Token::Text(s));
        }
        self
    }

    /// Append a qualified name.
    pub fn push_qual(
        mut self,
        path: impl Into<String>,
        alias: Option<String>,
        name: impl Into<String>,
    ) -> Self {
        self.tokens.push(Token::Qual {
            path: path.into(),
            alias: alias.filter(|a| !a.is_empty()),
            name: name.into(),
        });
        self
    }

    /// Append a literal.
    pub fn push_lit(mut self, value: impl Into<Value>) -> Self {
        self.tokens.push(Token::Lit(value.into()));
        self
    }

    /// Append every token of another statement.
    pub fn append(mut self, other: Statement) -> Self {
        for token in other.tokens {
            self = match token {
                Token::Text(s) => self.push_text(s),
                token => {
                    self.tokens.push(token);
                    self
                }
            };
        }
        self
    }

    /// Append the given statements separated by `sep`.
    pub fn join(mut self, items: impl IntoIterator<Item = Statement>, sep: &str) -> Self {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self = self.push_text(sep);
            }
            self = self.append(item);
        }
        self
    }

    /// The tokens of this statement.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Check if the statement has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Render to text, resolving qualified names through `imports`.
    pub fn render(&self, imports: &mut ImportSet) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                Token::Text(s) => out.push_str(s),
                Token::Qual { path, alias, name } => {
                    let local = imports.qualify(path, alias.as_deref());
                    out.push_str(&local);
                    out.push('.');
                    out.push_str(name);
                }
                Token::Lit(v) => out.push_str(&v.render(imports)),
            }
        }
        out
    }
}

impl From<&str> for Statement {
    fn from(s: &str) -> Self {
        Self::text(s)
    }
}

impl From<String> for Statement {
    fn from(s: String) -> Self {
        Self::text(s)
    }
}
