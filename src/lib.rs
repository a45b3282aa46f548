//! Top-level declaration indexer for Go source trees
//!
//! Parses Go files with tree-sitter, walks their top-level declarations and
//! produces a flat, position-addressable list of [`Decl`]s for editor
//! navigation.
//!
//! ```rust,no_run
//! use declindex::{DeclIndexer, GoParser, SourceContext};
//!
//! let mut parser = GoParser::new().unwrap();
//! let file = parser
//!     .parse_source("point.go", "package geo\n\ntype Point struct{ X, Y int }\n")
//!     .unwrap();
//!
//! let decls = DeclIndexer::new().index(&SourceContext::file(file)).unwrap();
//! assert_eq!(decls[0].ident, "Point");
//! ```

// Debug macro for consistent debug output
#[macro_export]
macro_rules! debug_print {
    ($self:expr, $($arg:tt)*) => {
        if $crate::config::is_global_debug_enabled() {
            eprintln!("DEBUG: {}", format!($($arg)*));
        }
    };
}

pub mod config;
pub mod error;
pub mod indexing;
pub mod navigation;
pub mod parsing;
pub mod types;

// Explicit exports for better API clarity
pub use config::Settings;
pub use error::{IndexError, IndexResult};
pub use indexing::{DeclIndexer, FileWalker};
pub use parsing::{GoParser, ParsedFile, PositionResolver, SignatureRenderer, SourceContext};
pub use types::{Decl, DeclKind, Position};

/// Index `ctx` with default settings and the Go signature renderer.
pub fn index(ctx: &SourceContext) -> IndexResult<Vec<Decl>> {
    DeclIndexer::new().index(ctx)
}
