//! Indentation configuration and the indentation normalizer.

use serde::{Deserialize, Deserializer, de};

const SPACES: &str = "        ";

/// One level of indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// A run of spaces, at most eight wide.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// Tab indentation, what gofmt produces.
    pub const GO: Self = Self::Tab;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(width) => &SPACES[..usize::from(*width).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }

    /// Remove one leading indentation unit from every line of `text`.
    ///
    /// Lines that do not start with a full unit are left untouched.
    pub fn strip_unit(&self, text: &str) -> String {
        let unit = self.as_str();
        text.split('\n')
            .map(|line| line.strip_prefix(unit).unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::GO
    }
}

/// Accepts `"tab"` or a space width.
impl<'de> Deserialize<'de> for Indent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Width(u8),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Width(0) => Err(de::Error::custom("indent width must be greater than 0")),
            Repr::Width(n) => Ok(Self::Spaces(n)),
            Repr::Name(name) if name.eq_ignore_ascii_case("tab") => Ok(Self::Tab),
            Repr::Name(name) => Err(de::Error::custom(format!(
                "unknown indent '{}', expected \"tab\" or a width",
                name
            ))),
        }
    }
}
