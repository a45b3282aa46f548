//! Top-level declaration indexer
//!
//! Walks every file of a [`SourceContext`], classifies each top-level
//! declaration and flattens it into a [`Decl`]. Output order is file order,
//! then declaration order, then specification order. Nothing is sorted.

use rayon::prelude::*;
use tree_sitter::Node;

use super::views::{DeclView, FuncView, TypeView, VarView};
use crate::config::{FunctionAnchor, IndexingConfig, Settings};
use crate::parsing::{
    GoSignatureRenderer, ParsedFile, SignatureRenderer, SourceContext, to_position,
};
use crate::types::{Decl, DeclKind, is_discarded};
use crate::{IndexError, IndexResult};

/// Declaration indexer over parsed Go files
pub struct DeclIndexer<R = GoSignatureRenderer> {
    renderer: R,
    config: IndexingConfig,
}

impl DeclIndexer<GoSignatureRenderer> {
    /// Indexer with default settings and the Go signature renderer
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self::with_renderer(settings, GoSignatureRenderer::new())
    }
}

impl Default for DeclIndexer<GoSignatureRenderer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SignatureRenderer> DeclIndexer<R> {
    pub fn with_renderer(settings: &Settings, renderer: R) -> Self {
        Self {
            renderer,
            config: settings.indexing.clone(),
        }
    }

    pub fn config(&self) -> &IndexingConfig {
        &self.config
    }

    /// Index every file of `ctx` in traversal order.
    ///
    /// An empty context yields an empty list. Malformed specifications are
    /// skipped; resolver and renderer failures are returned unchanged.
    pub fn index(&self, ctx: &SourceContext) -> IndexResult<Vec<Decl>> {
        let files = ctx.files();
        if files.is_empty() {
            tracing::debug!("source context has no files, nothing to index");
            return Ok(Vec::new());
        }

        let mut decls = Vec::new();
        for file in files {
            decls.extend(self.index_file(file)?);
        }
        Ok(decls)
    }

    /// Same result as [`index`](Self::index), with files traversed on a
    /// rayon pool of `indexing.parallel_threads` threads.
    pub fn index_parallel(&self, ctx: &SourceContext) -> IndexResult<Vec<Decl>> {
        let files = ctx.files();
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.parallel_threads.max(1))
            .build()
            .map_err(|e| IndexError::ThreadPool {
                reason: e.to_string(),
            })?;

        let per_file: Vec<Vec<Decl>> = pool.install(|| {
            files
                .par_iter()
                .map(|file| self.index_file(file))
                .collect::<IndexResult<_>>()
        })?;

        Ok(per_file.into_iter().flatten().collect())
    }

    /// Declarations of a single file.
    pub fn index_file(&self, file: &ParsedFile) -> IndexResult<Vec<Decl>> {
        let decls: Vec<Decl> = self
            .views(file)?
            .into_iter()
            .map(DeclView::into_decl)
            .collect();

        tracing::debug!(file = %file.filename(), decls = decls.len(), "indexed file");
        Ok(decls)
    }

    /// Classified declarations of a single file, before flattening.
    pub fn views<'t>(&self, file: &'t ParsedFile) -> IndexResult<Vec<DeclView<'t>>> {
        let root = file.root_node();
        let mut views = Vec::new();

        let mut cursor = root.walk();
        for decl in root.named_children(&mut cursor) {
            match decl.kind() {
                "var_declaration" => {
                    self.collect_values(file, decl, DeclKind::Var, "var_spec", &mut views)?
                }
                "const_declaration" => {
                    self.collect_values(file, decl, DeclKind::Const, "const_spec", &mut views)?
                }
                "type_declaration" => self.collect_types(file, decl, &mut views)?,
                "function_declaration" | "method_declaration" => {
                    if let Some(func) = self.func_view(file, decl)? {
                        views.push(DeclView::Func(func));
                    }
                }
                _ => {}
            }
        }

        Ok(views)
    }

    fn collect_values<'t>(
        &self,
        file: &'t ParsedFile,
        decl: Node<'t>,
        kind: DeclKind,
        spec_kind: &str,
        views: &mut Vec<DeclView<'t>>,
    ) -> IndexResult<()> {
        for spec in specs_of(decl, &[spec_kind]) {
            let mut cursor = spec.walk();
            // `const_spec` tags the separating commas with the `name` field too
            let names: Vec<Node<'t>> = spec
                .children_by_field_name("name", &mut cursor)
                .filter(|n| n.kind() == "identifier")
                .collect();
            let names = if self.config.expand_multi_name {
                &names[..]
            } else {
                &names[..names.len().min(1)]
            };

            if names.is_empty() {
                tracing::trace!(kind = spec.kind(), offset = spec.start_byte(), "spec without a name, skipped");
                continue;
            }

            for name_node in names {
                let name = &file.source()[name_node.byte_range()];
                if is_discarded(name) {
                    tracing::trace!(offset = name_node.start_byte(), "discarded {kind} name");
                    continue;
                }

                let var_pos = to_position(file, name_node.start_byte())?;
                views.push(DeclView::Var(VarView::new(kind, name.to_string(), var_pos, spec)));
            }
        }

        Ok(())
    }

    fn collect_types<'t>(
        &self,
        file: &'t ParsedFile,
        decl: Node<'t>,
        views: &mut Vec<DeclView<'t>>,
    ) -> IndexResult<()> {
        let grouped = has_child_token(decl, "(");

        for spec in specs_of(decl, &["type_spec", "type_alias"]) {
            let Some(name_node) = spec.child_by_field_name("name") else {
                tracing::trace!(offset = spec.start_byte(), "type spec without a name, skipped");
                continue;
            };

            let kind = match spec.child_by_field_name("type").map(|t| t.kind()) {
                Some("struct_type") => DeclKind::Struct,
                Some("interface_type") => DeclKind::Interface,
                _ => DeclKind::Type,
            };

            let signature = self.renderer.render_type(spec, file.source())?;
            if is_discarded(&signature.name) {
                tracing::trace!(offset = spec.start_byte(), "discarded type name");
                continue;
            }

            let type_pos = to_position(file, name_node.start_byte())?;

            // A spec inside `type ( ... )` only owns its own comment
            let doc_node = match doc_comment_start(spec) {
                Some(doc) => Some(doc),
                None if !grouped => doc_comment_start(decl),
                None => None,
            };
            let doc = doc_node
                .map(|doc| to_position(file, doc.start_byte()))
                .transpose()?;

            views.push(DeclView::Type(TypeView::new(
                kind, signature, type_pos, doc, spec,
            )));
        }

        Ok(())
    }

    fn func_view<'t>(
        &self,
        file: &'t ParsedFile,
        node: Node<'t>,
    ) -> IndexResult<Option<FuncView<'t>>> {
        let signature = self.renderer.render_function(node, file.source())?;
        if is_discarded(&signature.name) {
            tracing::trace!(offset = node.start_byte(), "discarded function name");
            return Ok(None);
        }

        let kind = if node.child_by_field_name("receiver").is_some() {
            DeclKind::Method
        } else {
            DeclKind::Function
        };

        let anchor = match self.config.function_anchor {
            FunctionAnchor::Keyword => node.start_byte(),
            FunctionAnchor::Name => node
                .child_by_field_name("name")
                .map_or(node.start_byte(), |n| n.start_byte()),
        };

        let mut func = FuncView::new(kind, signature, to_position(file, anchor)?, node);

        // Absent for forward declarations
        if let Some(body) = node.child_by_field_name("body") {
            let rbrace = body.end_byte().saturating_sub(1).max(body.start_byte());
            func.lbrace = Some(to_position(file, body.start_byte())?);
            func.rbrace = Some(to_position(file, rbrace)?);
        }

        func.doc = doc_comment_start(node)
            .map(|doc| to_position(file, doc.start_byte()))
            .transpose()?;

        Ok(Some(func))
    }
}

/// Specs of the expected kinds under a declaration, in source order, looking
/// through parenthesized spec lists. Any other shape except comments is
/// skipped.
fn specs_of<'t>(decl: Node<'t>, spec_kinds: &[&str]) -> Vec<Node<'t>> {
    let mut specs = Vec::new();
    let mut cursor = decl.walk();

    for child in decl.named_children(&mut cursor) {
        match child.kind() {
            kind if spec_kinds.contains(&kind) => specs.push(child),
            "var_spec_list" | "const_spec_list" | "type_spec_list" => {
                specs.extend(specs_of(child, spec_kinds));
            }
            "comment" => {}
            other => {
                tracing::trace!(kind = other, offset = child.start_byte(), "unexpected spec shape, skipped");
            }
        }
    }

    specs
}

fn has_child_token(node: Node<'_>, token: &str) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|c| c.kind() == token)
}

/// Start of the comment group directly above `node`.
///
/// The group must end on the line before `node` (or on its line) and must not
/// begin as a trailing comment of preceding code.
fn doc_comment_start(node: Node<'_>) -> Option<Node<'_>> {
    let mut first = None;
    let mut next_row = node.start_position().row;
    let mut current = node.prev_sibling();

    while let Some(sibling) = current {
        if sibling.kind() != "comment" || sibling.end_position().row + 1 < next_row {
            break;
        }
        first = Some(sibling);
        next_row = sibling.start_position().row;
        current = sibling.prev_sibling();
    }

    let first = first?;
    match first.prev_named_sibling() {
        Some(prev) if prev.end_position().row == first.start_position().row => None,
        _ => Some(first),
    }
}
