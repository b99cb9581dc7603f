//! Parameters and parameter lists.

use gocode_render::{CodeFragment, Renderable, Statement};

use super::{Code, Type};

/// A function parameter or result. A parameter without a name is anonymous
/// and renders as its bare type.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Option<String>,
    pub ty: Type,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        let name = name.into();
        Self {
            name: (!name.is_empty()).then_some(name),
            ty: ty.into(),
        }
    }

    pub fn anonymous(ty: impl Into<Type>) -> Self {
        Self {
            name: None,
            ty: ty.into(),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }

    pub fn to_statement(&self) -> Statement {
        match &self.name {
            Some(name) => Statement::text(format!("{} ", name)).append(self.ty.to_statement()),
            None => self.ty.to_statement(),
        }
    }
}

impl Renderable for Parameter {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.to_statement())]
    }
}

impl Code for Parameter {}

display_via_render!(Parameter);

/// `(a int, b string)`
pub(crate) fn param_list(params: &[Parameter]) -> Statement {
    Statement::text("(")
        .join(params.iter().map(Parameter::to_statement), ", ")
        .push_text(")")
}

/// A parameter list followed by its results.
///
/// No results render nothing after the parameters; a single anonymous
/// result renders bare; anything else is parenthesized.
pub(crate) fn signature(params: &[Parameter], results: &[Parameter]) -> Statement {
    let stmt = param_list(params);
    match results {
        [] => stmt,
        [only] if only.is_anonymous() => stmt.push_text(" ").append(only.to_statement()),
        _ => stmt.push_text(" ").append(param_list(results)),
    }
}
