//! Cursor-relative lookups over an indexed declaration list.
//!
//! These back "go to next/previous function" style commands: given a cursor
//! (file, line, column) they pick the nearest declaration in that file,
//! optionally restricted to some kinds.

use crate::types::{Decl, DeclKind};

/// Restricts lookups to a subset of kinds.
#[derive(Debug, Clone, Copy, Default)]
pub enum KindFilter<'a> {
    #[default]
    Any,
    /// Functions and methods
    Callable,
    /// Struct, Interface and Type
    Types,
    Only(&'a [DeclKind]),
}

impl KindFilter<'_> {
    pub fn accepts(&self, kind: DeclKind) -> bool {
        match self {
            KindFilter::Any => true,
            KindFilter::Callable => kind.is_callable(),
            KindFilter::Types => kind.is_type(),
            KindFilter::Only(kinds) => kinds.contains(&kind),
        }
    }
}

/// Declarations of one file, in index order.
pub fn decls_in_file<'d>(decls: &'d [Decl], filename: &str) -> Vec<&'d Decl> {
    decls.iter().filter(|d| d.filename() == filename).collect()
}

/// Every declaration named `ident`, in index order.
pub fn find_by_ident<'d>(decls: &'d [Decl], ident: &str) -> Vec<&'d Decl> {
    decls.iter().filter(|d| d.ident == ident).collect()
}

/// Nearest declaration in `filename` strictly after the cursor.
pub fn next_decl<'d>(
    decls: &'d [Decl],
    filename: &str,
    line: usize,
    column: usize,
    filter: KindFilter<'_>,
) -> Option<&'d Decl> {
    decls
        .iter()
        .filter(|d| d.filename() == filename && filter.accepts(d.kind))
        .filter(|d| d.position.is_after(line, column))
        .min_by_key(|d| (d.line(), d.column()))
}

/// Nearest declaration in `filename` strictly before the cursor.
pub fn prev_decl<'d>(
    decls: &'d [Decl],
    filename: &str,
    line: usize,
    column: usize,
    filter: KindFilter<'_>,
) -> Option<&'d Decl> {
    decls
        .iter()
        .filter(|d| d.filename() == filename && filter.accepts(d.kind))
        .filter(|d| d.position.is_before(line, column))
        .max_by_key(|d| (d.line(), d.column()))
}
