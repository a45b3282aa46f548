//! Default Go signature rendering.
//!
//! Functions render as their header without the body:
//! `func (p *Point) String() string`. Types render as `type` plus the spec,
//! with struct and interface bodies dropped: `type Point struct`,
//! `type List[T any] []T`, `type Alias = Other`.

use tree_sitter::Node;

use crate::parsing::signature::{Signature, SignatureRenderer, collapse_whitespace};
use crate::{IndexError, IndexResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct GoSignatureRenderer;

impl GoSignatureRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn field_text<'a>(node: Node<'_>, field: &str, source: &'a str) -> &'a str {
    node.child_by_field_name(field)
        .map(|n| &source[n.byte_range()])
        .unwrap_or_default()
}

fn unexpected(node: Node<'_>, expected: &str) -> IndexError {
    IndexError::SignatureError {
        node_kind: node.kind().to_string(),
        offset: node.start_byte(),
        reason: format!("expected {expected}"),
    }
}

impl SignatureRenderer for GoSignatureRenderer {
    fn render_function(&self, node: Node<'_>, source: &str) -> IndexResult<Signature> {
        if !matches!(node.kind(), "function_declaration" | "method_declaration") {
            return Err(unexpected(node, "function_declaration or method_declaration"));
        }

        let end = node
            .child_by_field_name("body")
            .map(|body| body.start_byte())
            .unwrap_or_else(|| node.end_byte());

        Ok(Signature::new(
            field_text(node, "name", source),
            collapse_whitespace(&source[node.start_byte()..end]),
        ))
    }

    fn render_type(&self, node: Node<'_>, source: &str) -> IndexResult<Signature> {
        if !matches!(node.kind(), "type_spec" | "type_alias") {
            return Err(unexpected(node, "type_spec or type_alias"));
        }

        let name = field_text(node, "name", source);
        let spec = match node.child_by_field_name("type") {
            // Keep the keyword, drop the field or method list
            Some(ty) if matches!(ty.kind(), "struct_type" | "interface_type") => {
                let keyword = ty.kind().trim_end_matches("_type");
                format!("{} {keyword}", &source[node.start_byte()..ty.start_byte()])
            }
            _ => source[node.byte_range()].to_string(),
        };

        Ok(Signature::new(
            name,
            collapse_whitespace(&format!("type {spec}")),
        ))
    }
}
