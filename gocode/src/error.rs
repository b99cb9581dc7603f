use miette::Diagnostic;
use thiserror::Error;

use crate::file::NodeId;

/// Result type for gocode operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("node {id} is not part of this file")]
    #[diagnostic(
        code(gocode::not_found),
        help("node ids are only valid for the file that returned them")
    )]
    NotFound { id: NodeId },

    #[error("constant '{name}' requires a value")]
    #[diagnostic(code(gocode::required_value))]
    RequiredValue { name: String },

    #[error("constant '{name}' has no Go constant literal")]
    #[diagnostic(
        code(gocode::not_constant),
        help("NaN and infinite floats can only initialize a var")
    )]
    NotConstant { name: String },

    #[error("invalid render configuration")]
    #[diagnostic(code(gocode::config))]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Create a not-found error for a node id.
    pub fn not_found(id: NodeId) -> Self {
        Self::NotFound { id }
    }

    /// Wrap a configuration error report.
    pub fn config(report: eyre::Report) -> Self {
        Self::Config(report.into())
    }

    /// Create a not-constant error.
    pub fn not_constant(name: impl Into<String>) -> Self {
        Self::NotConstant { name: name.into() }
    }

    /// Create a required-value error.
    pub fn required_value(name: impl Into<String>) -> Self {
        Self::RequiredValue { name: name.into() }
    }
}
