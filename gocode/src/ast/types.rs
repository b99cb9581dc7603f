//! Type expressions.

use gocode_render::{CodeFragment, Renderable, Statement};

use super::{Code, FunctionType, Import};

/// A Go type expression.
///
/// Shapes compose by nesting: `*[]pkg.T` is
/// `Pointer(Array(Qualified { .. }))`. A raw type carries a pre-rendered
/// fragment used verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// A plain name: `string`, `User`.
    Named(String),
    /// A name exported by another package: `http.Request`.
    Qualified { import: Import, name: String },
    /// A function signature: `func(a int) error`.
    Func(Box<FunctionType>),
    /// `*T`
    Pointer(Box<Type>),
    /// `[]T`
    Array(Box<Type>),
    /// `map[K]V`
    Map { key: Box<Type>, value: Box<Type> },
    /// `...T`, only meaningful as the last parameter.
    Variadic(Box<Type>),
    /// A pre-rendered fragment.
    Raw(Statement),
}

impl Type {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Same as [`Type::named`].
    pub fn new(qualifier: impl Into<String>) -> Self {
        Self::named(qualifier)
    }

    pub fn qualified(import: Import, name: impl Into<String>) -> Self {
        Self::Qualified {
            import,
            name: name.into(),
        }
    }

    pub fn func(signature: FunctionType) -> Self {
        Self::Func(Box::new(signature))
    }

    pub fn array(elem: Type) -> Self {
        Self::Array(Box::new(elem))
    }

    pub fn map(key: Type, value: Type) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// A raw type from source text, e.g. `chan<- error`.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(Statement::text(text))
    }

    /// A raw type from a pre-built statement, which may reference imports.
    pub fn raw_statement(stmt: Statement) -> Self {
        Self::Raw(stmt)
    }

    /// Wrap in a pointer.
    pub fn pointer(self) -> Self {
        Self::Pointer(Box::new(self))
    }

    /// Wrap in a slice.
    pub fn slice(self) -> Self {
        Self::array(self)
    }

    /// Mark as variadic.
    pub fn variadic(self) -> Self {
        Self::Variadic(Box::new(self))
    }

    /// The bare type name for named and qualified types.
    pub fn qualifier(&self) -> Option<&str> {
        match self {
            Self::Named(name) | Self::Qualified { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn import(&self) -> Option<&Import> {
        match self {
            Self::Qualified { import, .. } => Some(import),
            _ => None,
        }
    }

    pub fn function(&self) -> Option<&FunctionType> {
        match self {
            Self::Func(signature) => Some(&**signature),
            _ => None,
        }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer(_))
    }

    pub fn is_variadic(&self) -> bool {
        matches!(self, Self::Variadic(_))
    }

    /// The wrapped type for pointers, slices and variadics.
    pub fn elem(&self) -> Option<&Type> {
        match self {
            Self::Pointer(inner) | Self::Array(inner) | Self::Variadic(inner) => Some(&**inner),
            _ => None,
        }
    }

    pub fn to_statement(&self) -> Statement {
        match self {
            Self::Raw(stmt) => stmt.clone(),
            Self::Variadic(inner) => Statement::text("...").append(inner.to_statement()),
            Self::Pointer(inner) => Statement::text("*").append(inner.to_statement()),
            Self::Array(inner) => Statement::text("[]").append(inner.to_statement()),
            Self::Map { key, value } => Statement::text("map[")
                .append(key.to_statement())
                .push_text("]")
                .append(value.to_statement()),
            Self::Func(signature) => signature.to_statement(),
            Self::Qualified { import, name } => Statement::qual(
                import.path(),
                import.alias_name().map(str::to_string),
                name.clone(),
            ),
            Self::Named(name) => Statement::text(name.clone()),
        }
    }
}

impl From<&str> for Type {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for Type {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<FunctionType> for Type {
    fn from(signature: FunctionType) -> Self {
        Self::func(signature)
    }
}

impl Renderable for Type {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.to_statement())]
    }
}

impl Code for Type {}

display_via_render!(Type);
