//! Output assembly concerns shared by whole-file rendering.
//!
//! - [`ImportSet`] - Qualified name resolution and the import block

mod imports;

pub use imports::{ImportSet, guess_package_name};
