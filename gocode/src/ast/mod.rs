//! Go declaration builders.
//!
//! Every node renders to a fragment tree ([`Renderable`]) and to standalone
//! source text ([`Code::render`]). Nodes that can carry doc comments also
//! implement [`Documented`].
//!
//! ```
//! use gocode::ast::{Code, Struct, StructField, Type};
//!
//! let user = Struct::new("User")
//!     .doc("User is a registered account.")
//!     .field(StructField::new("Name", Type::named("string")).tag("json", "name"));
//!
//! assert_eq!(
//!     user.render(),
//!     "// User is a registered account.\ntype User struct {\n\tName string `json:\"name\"`\n}"
//! );
//! ```

/// Implements `Documented` for a builder with a `docs: Vec<Comment>` field,
/// plus the consuming `doc`/`with_docs` builder methods.
macro_rules! documented {
    ($ty:ty) => {
        impl $crate::ast::Documented for $ty {
            fn docs(&self) -> &[$crate::ast::Comment] {
                &self.docs
            }

            fn add_doc(&mut self, doc: $crate::ast::Comment) {
                self.docs.push(doc);
            }
        }

        impl $ty {
            /// Add a doc comment line.
            pub fn doc(mut self, doc: impl Into<$crate::ast::Comment>) -> Self {
                self.docs.push(doc.into());
                self
            }

            /// Add several doc comment lines.
            pub fn with_docs<I>(mut self, docs: I) -> Self
            where
                I: IntoIterator,
                I::Item: Into<$crate::ast::Comment>,
            {
                self.docs.extend(docs.into_iter().map(Into::into));
                self
            }
        }
    };
}

/// Implements `Display` through `Code::render`.
macro_rules! display_via_render {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&$crate::ast::Code::render(self))
                }
            }
        )+
    };
}

mod comment;
mod fns;
mod import;
mod interface;
mod params;
mod raw;
mod structs;
mod types;
mod vars;

use gocode_render::{CodeFragment, Renderable, builder::render_standalone};

pub use comment::Comment;
pub use fns::{Function, FunctionType};
pub use import::Import;
pub use interface::{Interface, InterfaceMethod};
pub use params::Parameter;
pub use raw::RawCode;
pub use structs::{FieldTags, Struct, StructField};
pub use types::Type;
pub use vars::{Const, Var};

/// A node that renders to Go source.
pub trait Code: Renderable {
    /// Render the node on its own, without a trailing line break.
    fn render(&self) -> String {
        render_standalone(self)
    }
}

/// A node that accepts doc comments.
pub trait Documented {
    /// The doc comments, in insertion order.
    fn docs(&self) -> &[Comment];

    /// Append one doc comment.
    fn add_doc(&mut self, doc: Comment);

    /// Append several doc comments.
    fn add_docs<I>(&mut self, docs: I)
    where
        I: IntoIterator,
        I::Item: Into<Comment>,
        Self: Sized,
    {
        for doc in docs {
            self.add_doc(doc.into());
        }
    }
}

/// Doc comments as fragments, one comment line each.
fn doc_fragments(docs: &[Comment]) -> impl Iterator<Item = CodeFragment> + '_ {
    docs.iter().map(Comment::to_fragment)
}
