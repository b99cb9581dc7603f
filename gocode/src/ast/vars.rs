//! Package-level `var` and `const` declarations.

use gocode_render::{CodeFragment, Renderable, Statement, Value};

use super::{Code, Comment, Type, doc_fragments};
use crate::error::{Error, Result};

/// A `var` declaration with an optional literal initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct Var {
    name: String,
    ty: Type,
    value: Option<Value>,
    docs: Vec<Comment>,
}

impl Var {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: None,
            docs: Vec::new(),
        }
    }

    /// Set the initializer.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn set_value(&mut self, value: Option<Value>) {
        self.value = value;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn literal(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

documented!(Var);

impl Renderable for Var {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut stmt = declaration("var", &self.name, &self.ty);
        if let Some(value) = &self.value {
            stmt = stmt.push_text(" = ").push_lit(value.clone());
        }
        doc_fragments(&self.docs)
            .chain(std::iter::once(CodeFragment::Line(stmt)))
            .collect()
    }
}

impl Code for Var {}

/// A `const` declaration. Constants always carry a value.
///
/// `Const::new` does not check the value; a non-finite float renders as a
/// `math` call that Go rejects in a constant. Use [`Const::try_new`] to
/// catch that.
#[derive(Debug, Clone, PartialEq)]
pub struct Const {
    name: String,
    ty: Type,
    value: Value,
    docs: Vec<Comment>,
}

impl Const {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            value: value.into(),
            docs: Vec::new(),
        }
    }

    /// Build a constant from an optional value, failing when it is missing
    /// or is not a Go constant (NaN, infinities).
    pub fn try_new(
        name: impl Into<String>,
        ty: impl Into<Type>,
        value: Option<Value>,
    ) -> Result<Self> {
        let name = name.into();
        match value {
            Some(value) if value.is_constant() => Ok(Self::new(name, ty, value)),
            Some(_) => Err(Error::not_constant(name)),
            None => Err(Error::required_value(name)),
        }
    }

    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn literal(&self) -> &Value {
        &self.value
    }
}

documented!(Const);

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let stmt = declaration("const", &self.name, &self.ty)
            .push_text(" = ")
            .push_lit(self.value.clone());
        doc_fragments(&self.docs)
            .chain(std::iter::once(CodeFragment::Line(stmt)))
            .collect()
    }
}

impl Code for Const {}

display_via_render!(Var, Const);

fn declaration(keyword: &str, name: &str, ty: &Type) -> Statement {
    Statement::text(format!("{} {} ", keyword, name)).append(ty.to_statement())
}
