use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The discard identifier. Declarations bound to it are never emitted.
pub const BLANK_IDENT: &str = "_";

/// Closed set of declaration kinds the indexer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclKind {
    Function,
    Method,
    Struct,
    Interface,
    Type,
    Var,
    Const,
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Function => "Function",
            DeclKind::Method => "Method",
            DeclKind::Struct => "Struct",
            DeclKind::Interface => "Interface",
            DeclKind::Type => "Type",
            DeclKind::Var => "Var",
            DeclKind::Const => "Const",
        }
    }

    /// Functions and methods, the kinds "next/previous function" navigation walks.
    pub fn is_callable(&self) -> bool {
        matches!(self, DeclKind::Function | DeclKind::Method)
    }

    /// Struct, Interface and Type.
    pub fn is_type(&self) -> bool {
        matches!(self, DeclKind::Struct | DeclKind::Interface | DeclKind::Type)
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeclKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Function" => Ok(DeclKind::Function),
            "Method" => Ok(DeclKind::Method),
            "Struct" => Ok(DeclKind::Struct),
            "Interface" => Ok(DeclKind::Interface),
            "Type" => Ok(DeclKind::Type),
            "Var" => Ok(DeclKind::Var),
            "Const" => Ok(DeclKind::Const),
            _ => Err("Unknown declaration kind"),
        }
    }
}

/// An absolute source location. Lines and columns are 1-based; the column
/// counts bytes from the start of the line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub filename: String,
    pub line: usize,
    #[serde(rename = "col")]
    pub column: usize,
}

impl Position {
    pub fn new(filename: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            filename: filename.into(),
            line,
            column,
        }
    }

    /// True if `self` comes strictly before `(line, column)` in the same file.
    pub fn is_before(&self, line: usize, column: usize) -> bool {
        (self.line, self.column) < (line, column)
    }

    /// True if `self` comes strictly after `(line, column)` in the same file.
    pub fn is_after(&self, line: usize, column: usize) -> bool {
        (self.line, self.column) > (line, column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

/// A normalized top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decl {
    #[serde(rename = "keyword")]
    pub kind: DeclKind,
    pub ident: String,
    /// Human-readable signature. Equal to `ident` for vars and consts.
    pub full: String,
    #[serde(flatten)]
    pub position: Position,
}

impl Decl {
    pub fn new(
        kind: DeclKind,
        ident: impl Into<String>,
        full: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            kind,
            ident: ident.into(),
            full: full.into(),
            position,
        }
    }

    pub fn filename(&self) -> &str {
        &self.position.filename
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }
}

impl fmt::Display for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.kind, self.full, self.position)
    }
}

/// True for names that must never reach the output.
pub fn is_discarded(name: &str) -> bool {
    name.is_empty() || name == BLANK_IDENT
}
