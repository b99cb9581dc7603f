//! Go interface builders.

use gocode_render::{CodeFragment, Renderable, Statement, builder::render_member};

use super::{Code, Comment, Parameter, Type, doc_fragments, params::signature};

/// A method in an interface type: `Name(params) results`.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceMethod {
    name: String,
    params: Vec<Parameter>,
    results: Vec<Parameter>,
    docs: Vec<Comment>,
}

impl InterfaceMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            results: Vec::new(),
            docs: Vec::new(),
        }
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn result(mut self, result: Parameter) -> Self {
        self.results.push(result);
        self
    }

    pub fn push_param(&mut self, param: Parameter) {
        self.params.push(param);
    }

    pub fn push_result(&mut self, result: Parameter) {
        self.results.push(result);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn results(&self) -> &[Parameter] {
        &self.results
    }
}

documented!(InterfaceMethod);

impl Renderable for InterfaceMethod {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let stmt = Statement::text(self.name.clone()).append(signature(&self.params, &self.results));
        doc_fragments(&self.docs)
            .chain(std::iter::once(CodeFragment::Line(stmt)))
            .collect()
    }
}

impl Code for InterfaceMethod {
    fn render(&self) -> String {
        render_member(self)
    }
}

/// Builder for Go interface type declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    name: String,
    embeds: Vec<Type>,
    methods: Vec<InterfaceMethod>,
    docs: Vec<Comment>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            embeds: Vec::new(),
            methods: Vec::new(),
            docs: Vec::new(),
        }
    }

    /// Embed another interface. Embeds render before methods.
    pub fn embed(mut self, ty: impl Into<Type>) -> Self {
        self.embeds.push(ty.into());
        self
    }

    pub fn method(mut self, method: InterfaceMethod) -> Self {
        self.methods.push(method);
        self
    }

    pub fn push_embed(&mut self, ty: impl Into<Type>) {
        self.embeds.push(ty.into());
    }

    pub fn push_method(&mut self, method: InterfaceMethod) {
        self.methods.push(method);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn embeds(&self) -> &[Type] {
        &self.embeds
    }

    pub fn methods(&self) -> &[InterfaceMethod] {
        &self.methods
    }

    pub fn methods_mut(&mut self) -> &mut Vec<InterfaceMethod> {
        &mut self.methods
    }
}

documented!(Interface);

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<_> = doc_fragments(&self.docs).collect();

        if self.embeds.is_empty() && self.methods.is_empty() {
            fragments.push(CodeFragment::line(format!("type {} interface{{}}", self.name)));
            return fragments;
        }

        let body = self
            .embeds
            .iter()
            .map(|ty| CodeFragment::Line(ty.to_statement()))
            .chain(self.methods.iter().flat_map(Renderable::to_fragments))
            .collect();
        fragments.push(CodeFragment::block(
            format!("type {} interface {{", self.name),
            body,
            Some(Statement::text("}")),
        ));
        fragments
    }
}

impl Code for Interface {}

display_via_render!(InterfaceMethod, Interface);
