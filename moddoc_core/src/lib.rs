//! `moddoc_core` is the formatting engine behind moddoc. It holds the
//! canonical data model of a documented module, applies a configurable view
//! policy (section visibility, ordering, indentation, escaping, value
//! exposure), and dispatches to one of several format backends — tabular
//! and document-style markup, structured serialization formats, a console
//! variant, and variable files — each producing byte-exact text for its
//! target syntax.

pub use error::*;
pub use header::*;
pub use module::*;
pub use settings::*;
pub use sort::*;

mod error;
pub mod format;
mod header;
mod module;
pub(crate) mod sections;
mod settings;
mod sort;

pub use format::Printer;
pub use format::lookup;
pub use format::render;

#[cfg(test)]
mod __fixtures;
