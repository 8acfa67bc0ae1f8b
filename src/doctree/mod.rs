//! The source document tree: an already-parsed reStructuredText doctree.
//!
//! Trees can be built in code with the [`Node`] builder methods, deserialized
//! from JSON, or loaded from the XML that docutils writes.

mod error;
mod node;
mod xml;

pub use error::{DoctreeError, Result};
pub use node::{Node, NodeKind};
pub use xml::parse_docutils_xml;
