//! Signature rendering seam.
//!
//! The indexer never formats declarations itself. It hands function and type
//! nodes to a [`SignatureRenderer`] and records the returned strings.

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

use crate::IndexResult;

/// Bare name plus full human-readable rendering of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub full: String,
}

impl Signature {
    pub fn new(name: impl Into<String>, full: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full: full.into(),
        }
    }
}

pub trait SignatureRenderer: Send + Sync {
    /// Render a `function_declaration` or `method_declaration` node.
    fn render_function(&self, node: Node<'_>, source: &str) -> IndexResult<Signature>;

    /// Render a `type_spec` or `type_alias` node.
    fn render_type(&self, node: Node<'_>, source: &str) -> IndexResult<Signature>;
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
