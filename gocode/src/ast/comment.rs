//! Line comments.

use gocode_render::{CodeFragment, Renderable};

use super::Code;

/// A single line comment, rendered as `// text`.
///
/// Text spanning several lines renders one comment line per line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comment(String);

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub(crate) fn to_fragment(&self) -> CodeFragment {
        CodeFragment::comment(self.0.clone())
    }
}

impl From<&str> for Comment {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Comment {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl Renderable for Comment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.to_fragment()]
    }
}

impl Code for Comment {}

display_via_render!(Comment);
