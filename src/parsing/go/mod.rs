//! Go language support
//!
//! Tree-sitter-go parsing and the default signature renderer for Go
//! declarations.
//!
//! ## Module Components
//!
//! - [`parser`]: Tree-sitter integration producing [`ParsedFile`](crate::parsing::ParsedFile)s
//! - [`signature`]: Rendering of function and type declaration headers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use declindex::parsing::go::GoParser;
//!
//! let mut parser = GoParser::new().unwrap();
//! let file = parser.parse_source("main.go", "package main\n").unwrap();
//! assert_eq!(file.package_name(), Some("main"));
//! ```

pub mod parser;
pub mod signature;

pub use parser::GoParser;
pub use signature::GoSignatureRenderer;
