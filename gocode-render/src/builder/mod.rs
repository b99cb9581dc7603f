//! Code generation building blocks.
//!
//! This module provides the core primitives for producing Go source:
//! - [`Statement`] - Token-level representation of one line of code
//! - [`Value`] - Literal values rendered with Go syntax
//! - [`CodeFragment`] - Layout tree (lines, blocks, comments)
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`CodeBuilder`] - Mutable API for building indented code
//! - [`FileBuilder`] - Package clause, import block and declarations
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod file_builder;
mod indent;
mod renderable;
mod statement;
pub mod value;

pub use code_builder::{CodeBuilder, render_member, render_standalone};
pub use file_builder::FileBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use statement::{Statement, Token};
pub use value::Value;
