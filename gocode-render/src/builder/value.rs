//! Literal values.
//!
//! A [`Value`] is a literal initializer rendered with Go syntax by
//! [`Value::to_go_literal`]. Expressions go through raw statements instead.

use std::fmt;

use crate::generation::ImportSet;

/// A `var`/`const` initializer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Rendered as an interpreted string literal.
    String(String),
}

impl Value {
    pub fn bool(v: bool) -> Self {
        Self::Bool(v)
    }

    pub fn int(v: i64) -> Self {
        Self::Int(v)
    }

    pub fn uint(v: u64) -> Self {
        Self::UInt(v)
    }

    pub fn float(v: f64) -> Self {
        Self::Float(v)
    }

    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// `true`, `42`, `1.5`, `"text"`.
    ///
    /// Go has no literal for NaN or the infinities; those render as
    /// `math.NaN()` and `math.Inf(±1)`, which are valid initializers for a
    /// `var` but not for a `const`.
    pub fn to_go_literal(&self) -> String {
        self.render(&mut ImportSet::standalone())
    }

    /// Whether the value is a Go constant expression.
    pub fn is_constant(&self) -> bool {
        match self {
            Self::Float(v) => v.is_finite(),
            _ => true,
        }
    }

    pub(crate) fn render(&self, imports: &mut ImportSet) -> String {
        match self {
            Self::Bool(v) => v.to_string(),
            Self::Int(v) => v.to_string(),
            Self::UInt(v) => v.to_string(),
            Self::Float(v) if v.is_nan() => format!("{}.NaN()", imports.qualify("math", None)),
            Self::Float(v) if v.is_infinite() => {
                let sign = if v.is_sign_negative() { -1 } else { 1 };
                format!("{}.Inf({})", imports.qualify("math", None), sign)
            }
            Self::Float(v) => format_float(*v),
            Self::String(v) => quote(v),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_go_literal())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::UInt(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::UInt(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

// Shortest round-trip form; integral values keep a `.0` so the literal stays
// a float constant in Go.
fn format_float(v: f64) -> String {
    let s = format!("{:?}", v);
    if !s.contains(['.', 'e', 'E']) {
        format!("{}.0", s)
    } else {
        s
    }
}

/// Quote a string as a Go interpreted string literal.
///
/// Follows Go's escaping: the short escapes for the usual control
/// characters, `\xNN` for other ASCII controls, `\uNNNN`/`\UNNNNNNNN` for
/// non-printable code points beyond ASCII.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c if c.is_control() => {
                let code = c as u32;
                if code < 0x80 {
                    out.push_str(&format!("\\x{:02x}", code));
                } else if code < 0x10000 {
                    out.push_str(&format!("\\u{:04x}", code));
                } else {
                    out.push_str(&format!("\\U{:08x}", code));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_literals() {
        assert_eq!(Value::int(4).to_go_literal(), "4");
        assert_eq!(Value::int(-12).to_go_literal(), "-12");
        assert_eq!(Value::uint(7).to_go_literal(), "7");
        assert_eq!(Value::bool(true).to_go_literal(), "true");
    }

    #[test]
    fn test_float_literals() {
        assert_eq!(Value::float(1.5).to_go_literal(), "1.5");
        assert_eq!(Value::float(2.0).to_go_literal(), "2.0");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(Value::float(f64::NAN).to_go_literal(), "math.NaN()");
        assert_eq!(Value::float(f64::INFINITY).to_go_literal(), "math.Inf(1)");
        assert_eq!(Value::float(f64::NEG_INFINITY).to_go_literal(), "math.Inf(-1)");
        assert!(!Value::float(f64::NAN).is_constant());
        assert!(Value::float(0.5).is_constant());

        let mut imports = ImportSet::for_file();
        assert_eq!(Value::float(f64::NAN).render(&mut imports), "math.NaN()");
        assert!(imports.contains("math"));
    }

    #[test]
    fn test_string_quoting() {
        assert_eq!(quote("hello"), "\"hello\"");
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote("line\nbreak\t"), "\"line\\nbreak\\t\"");
        assert_eq!(quote("back\\slash"), "\"back\\\\slash\"");
        assert_eq!(quote("\u{1}"), "\"\\x01\"");
        assert_eq!(quote("héllo"), "\"héllo\"");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(3), Value::Int(3));
        assert_eq!(Value::from("x"), Value::String("x".into()));
        assert_eq!(Value::from(false), Value::Bool(false));
    }
}
