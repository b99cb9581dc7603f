//! Go function builders.

use gocode_render::{CodeFragment, Renderable, Statement};

use super::{Code, Comment, Parameter, doc_fragments, params::signature};

/// A function signature without a name: `func(a int) error`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionType {
    params: Vec<Parameter>,
    results: Vec<Parameter>,
}

impl FunctionType {
    pub fn new() -> Self {
        Self::default()
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

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn results(&self) -> &[Parameter] {
        &self.results
    }

    pub fn to_statement(&self) -> Statement {
        Statement::text("func").append(signature(&self.params, &self.results))
    }
}

impl Renderable for FunctionType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.to_statement())]
    }
}

impl Code for FunctionType {}

/// Builder for Go function and method declarations.
///
/// The body is a list of opaque lines; nothing inside it is parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    name: String,
    receiver: Option<Parameter>,
    params: Vec<Parameter>,
    results: Vec<Parameter>,
    body: Vec<Statement>,
    docs: Vec<Comment>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: None,
            params: Vec::new(),
            results: Vec::new(),
            body: Vec::new(),
            docs: Vec::new(),
        }
    }

    /// Make this a method on `receiver`.
    pub fn receiver(mut self, receiver: Parameter) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn result(mut self, result: Parameter) -> Self {
        self.results.push(result);
        self
    }

    /// Append one body line.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.push_body_line(line);
        self
    }

    /// Append every line of a multi-line snippet.
    pub fn body_text(mut self, text: &str) -> Self {
        self.body.extend(text.lines().map(Statement::text));
        self
    }

    /// Append a pre-built statement, which may reference other packages.
    pub fn body_statement(mut self, stmt: Statement) -> Self {
        self.body.push(stmt);
        self
    }

    pub fn set_receiver(&mut self, receiver: Option<Parameter>) {
        self.receiver = receiver;
    }

    pub fn push_param(&mut self, param: Parameter) {
        self.params.push(param);
    }

    pub fn push_result(&mut self, result: Parameter) {
        self.results.push(result);
    }

    pub fn push_body_line(&mut self, line: impl Into<String>) {
        self.body.push(Statement::text(line));
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn receiver_param(&self) -> Option<&Parameter> {
        self.receiver.as_ref()
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn results(&self) -> &[Parameter] {
        &self.results
    }

    pub fn body(&self) -> &[Statement] {
        &self.body
    }

    fn header(&self) -> Statement {
        let mut stmt = Statement::text("func ");
        if let Some(receiver) = &self.receiver {
            stmt = stmt
                .push_text("(")
                .append(receiver.to_statement())
                .push_text(") ");
        }
        stmt.push_text(self.name.clone())
            .append(signature(&self.params, &self.results))
    }
}

documented!(Function);

impl Renderable for Function {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<_> = doc_fragments(&self.docs).collect();
        let header = self.header();

        if self.body.is_empty() {
            fragments.push(CodeFragment::Line(header.push_text(" {}")));
        } else {
            let body = self
                .body
                .iter()
                .map(|stmt| {
                    if stmt.is_empty() {
                        CodeFragment::Blank
                    } else {
                        CodeFragment::Line(stmt.clone())
                    }
                })
                .collect();
            fragments.push(CodeFragment::block(
                header.push_text(" {"),
                body,
                Some(Statement::text("}")),
            ));
        }

        fragments
    }
}

impl Code for Function {}

display_via_render!(FunctionType, Function);
