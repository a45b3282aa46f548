//! Per-kind views built while walking a file, before they are flattened
//! into [`Decl`]s.
//!
//! Each view borrows the tree node it was built from. The node is only there
//! for callers that want to look further into the declaration; the emitted
//! `Decl` never depends on it.

use tree_sitter::Node;

use crate::parsing::Signature;
use crate::types::{Decl, DeclKind, Position};

/// A `var` or `const` specification.
#[derive(Debug, Clone)]
pub struct VarView<'tree> {
    pub kind: DeclKind,
    pub name: String,
    pub var_pos: Position,
    node: Node<'tree>,
}

impl<'tree> VarView<'tree> {
    pub(crate) fn new(kind: DeclKind, name: String, var_pos: Position, node: Node<'tree>) -> Self {
        Self {
            kind,
            name,
            var_pos,
            node,
        }
    }

    /// The `var_spec` / `const_spec` node.
    pub fn node(&self) -> Node<'tree> {
        self.node
    }

    pub fn into_decl(self) -> Decl {
        Decl::new(self.kind, self.name.clone(), self.name, self.var_pos)
    }
}

/// A type specification classified as Struct, Interface or Type.
#[derive(Debug, Clone)]
pub struct TypeView<'tree> {
    pub kind: DeclKind,
    pub signature: Signature,
    pub type_pos: Position,
    /// Start of the doc comment preceding the spec or its declaration
    pub doc: Option<Position>,
    node: Node<'tree>,
}

impl<'tree> TypeView<'tree> {
    pub(crate) fn new(
        kind: DeclKind,
        signature: Signature,
        type_pos: Position,
        doc: Option<Position>,
        node: Node<'tree>,
    ) -> Self {
        Self {
            kind,
            signature,
            type_pos,
            doc,
            node,
        }
    }

    /// The `type_spec` / `type_alias` node.
    pub fn node(&self) -> Node<'tree> {
        self.node
    }

    pub fn into_decl(self) -> Decl {
        Decl::new(
            self.kind,
            self.signature.name,
            self.signature.full,
            self.type_pos,
        )
    }
}

/// A function or method declaration.
#[derive(Debug, Clone)]
pub struct FuncView<'tree> {
    pub kind: DeclKind,
    pub signature: Signature,
    pub func_pos: Position,
    /// Body braces; both `None` for a declaration without a body
    pub lbrace: Option<Position>,
    pub rbrace: Option<Position>,
    pub doc: Option<Position>,
    node: Node<'tree>,
}

impl<'tree> FuncView<'tree> {
    pub(crate) fn new(
        kind: DeclKind,
        signature: Signature,
        func_pos: Position,
        node: Node<'tree>,
    ) -> Self {
        Self {
            kind,
            signature,
            func_pos,
            lbrace: None,
            rbrace: None,
            doc: None,
            node,
        }
    }

    /// The `function_declaration` / `method_declaration` node.
    pub fn node(&self) -> Node<'tree> {
        self.node
    }

    /// True for declarations implemented elsewhere (no body).
    pub fn is_forward(&self) -> bool {
        self.lbrace.is_none()
    }

    pub fn into_decl(self) -> Decl {
        Decl::new(
            self.kind,
            self.signature.name,
            self.signature.full,
            self.func_pos,
        )
    }
}

/// One classified top-level declaration.
#[derive(Debug, Clone)]
pub enum DeclView<'tree> {
    Var(VarView<'tree>),
    Type(TypeView<'tree>),
    Func(FuncView<'tree>),
}

impl<'tree> DeclView<'tree> {
    pub fn kind(&self) -> DeclKind {
        match self {
            DeclView::Var(v) => v.kind,
            DeclView::Type(t) => t.kind,
            DeclView::Func(f) => f.kind,
        }
    }

    pub fn ident(&self) -> &str {
        match self {
            DeclView::Var(v) => &v.name,
            DeclView::Type(t) => &t.signature.name,
            DeclView::Func(f) => &f.signature.name,
        }
    }

    pub fn into_decl(self) -> Decl {
        match self {
            DeclView::Var(v) => v.into_decl(),
            DeclView::Type(t) => t.into_decl(),
            DeclView::Func(f) => f.into_decl(),
        }
    }
}
