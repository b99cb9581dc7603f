//! Typed builders for Go source code.
//!
//! Declarations ([`ast`]) render to Go on their own or as part of a
//! [`File`], an ordered node sequence that can be spliced by [`NodeId`]
//! and rendered with its import block.
//!
//! # Module Organization
//!
//! - [`ast`] - Declaration builders (types, vars, structs, functions, interfaces)
//! - [`file`] - Files, node ids and import alias directives

pub mod ast;
mod error;
pub mod file;
mod node;

pub use ast::{Code, Documented};
pub use error::{Error, Result};
pub use file::{File, ImportAlias, NodeId};
pub use gocode_render::{Indent, RenderConfig, Statement, Value};
pub use node::Node;
