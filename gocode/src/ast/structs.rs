//! Go struct builder.

use gocode_render::{
    CodeFragment, Renderable, Statement,
    builder::{render_member, value::quote},
};
use indexmap::IndexMap;

use super::{Code, Comment, Parameter, Type, doc_fragments};

/// Struct field tags, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTags(IndexMap<String, String>);

impl FieldTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tag, overwriting the value in place if the key exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The tag as a Go string literal, `None` when there are no tags.
    pub fn to_literal(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let body = self
            .iter()
            .map(|(k, v)| format!("{}:{}", k, quote(v)))
            .collect::<Vec<_>>()
            .join(" ");
        // A raw string literal cannot hold a backtick.
        if body.contains('`') {
            Some(quote(&body))
        } else {
            Some(format!("`{}`", body))
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldTags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A field in a Go struct. A field without a name is embedded.
#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    pub param: Parameter,
    pub tags: Option<FieldTags>,
    docs: Vec<Comment>,
}

impl StructField {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self::from_param(Parameter::new(name, ty))
    }

    /// An embedded field: `io.Reader`, `*Base`.
    pub fn embedded(ty: impl Into<Type>) -> Self {
        Self::from_param(Parameter::anonymous(ty))
    }

    pub fn from_param(param: Parameter) -> Self {
        Self {
            param,
            tags: None,
            docs: Vec::new(),
        }
    }

    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_tag(key, value);
        self
    }

    /// Replace all tags.
    pub fn with_tags(mut self, tags: FieldTags) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn set_tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.get_or_insert_with(FieldTags::new).set(key, value);
    }

    pub fn name(&self) -> Option<&str> {
        self.param.name.as_deref()
    }

    pub fn ty(&self) -> &Type {
        &self.param.ty
    }

    pub fn is_embedded(&self) -> bool {
        self.param.is_anonymous()
    }

    fn to_statement(&self) -> Statement {
        let stmt = self.param.to_statement();
        match self.tags.as_ref().and_then(FieldTags::to_literal) {
            Some(literal) => stmt.push_text(format!(" {}", literal)),
            None => stmt,
        }
    }
}

documented!(StructField);

impl Renderable for StructField {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        doc_fragments(&self.docs)
            .chain(std::iter::once(CodeFragment::Line(self.to_statement())))
            .collect()
    }
}

impl Code for StructField {
    fn render(&self) -> String {
        render_member(self)
    }
}

/// Builder for Go struct type declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Struct {
    name: String,
    fields: Vec<StructField>,
    docs: Vec<Comment>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            docs: Vec::new(),
        }
    }

    pub fn field(mut self, field: StructField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = StructField>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn push_field(&mut self, field: StructField) {
        self.fields.push(field);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[StructField] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Vec<StructField> {
        &mut self.fields
    }
}

documented!(Struct);

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<_> = doc_fragments(&self.docs).collect();

        if self.fields.is_empty() {
            fragments.push(CodeFragment::line(format!("type {} struct{{}}", self.name)));
        } else {
            fragments.push(CodeFragment::block(
                format!("type {} struct {{", self.name),
                self.fields.iter().flat_map(Renderable::to_fragments).collect(),
                Some(Statement::text("}")),
            ));
        }

        fragments
    }
}

impl Code for Struct {}

display_via_render!(StructField, Struct);
