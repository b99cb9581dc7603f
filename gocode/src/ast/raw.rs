//! Verbatim source.

use gocode_render::{CodeFragment, Renderable};

use super::Code;

/// Opaque Go source, emitted line by line at the current indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCode(String);

impl RawCode {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawCode {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for RawCode {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| {
                if line.is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::line(line)
                }
            })
            .collect()
    }
}

impl Code for RawCode {}

display_via_render!(RawCode);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_lines() {
        let raw = RawCode::new("func init() {\n\tregister()\n}");
        assert_eq!(raw.render(), "func init() {\n\tregister()\n}");
    }

    #[test]
    fn test_blank_lines_kept() {
        assert_eq!(RawCode::from("a := 1\n\nb := 2").to_string(), "a := 1\n\nb := 2");
    }
}
