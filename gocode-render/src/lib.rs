//! Rendering engine for gocode.
//!
//! This crate turns statement trees into Go source text. Declaration
//! builders (in the `gocode` crate) produce [`CodeFragment`]s made of
//! [`Statement`]s; this crate lays them out, resolves qualified names to
//! package names and assembles whole files with their import block.
//!
//! # Module Organization
//!
//! - [`builder`] - Statements, fragments, CodeBuilder, FileBuilder
//! - [`generation`] - Import resolution (ImportSet)
//! - [`config`] - Render configuration (RenderConfig)

pub mod builder;
pub mod config;
pub mod generation;

pub use builder::{
    CodeBuilder, CodeFragment, FileBuilder, Indent, Renderable, Statement, Token, Value,
};
pub use config::RenderConfig;
pub use generation::ImportSet;
