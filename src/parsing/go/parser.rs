//! Go parser implementation
//!
//! Uses tree-sitter-go crate’s LANGUAGE constant (converted via .into()).
//!
//! Note: This parser uses ABI-15 (upgraded from ABI-14).
//! When migrating or updating the parser, ensure compatibility with ABI-15 features.

use std::path::{Path, PathBuf};
use tree_sitter::Parser;

use crate::parsing::ParsedFile;
use crate::{IndexError, IndexResult};

/// Go language parser
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    /// Create a new Go parser
    pub fn new() -> IndexResult<Self> {
        let mut parser = Parser::new();
        let lang = tree_sitter_go::LANGUAGE;
        parser
            .set_language(&lang.into())
            .map_err(|e| IndexError::ParserInit {
                language: "Go".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { parser })
    }

    /// Parse Go source text. `path` is the name recorded in resolved positions.
    ///
    /// Syntax errors are kept inside the tree as error nodes; only a parse that
    /// produces no tree at all is reported as an error.
    pub fn parse_source(
        &mut self,
        path: impl Into<PathBuf>,
        source: impl Into<String>,
    ) -> IndexResult<ParsedFile> {
        let path = path.into();
        let source = source.into();

        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| IndexError::ParseError {
                path: path.clone(),
                language: "Go".to_string(),
                reason: "parser returned no tree".to_string(),
            })?;

        if tree.root_node().has_error() {
            tracing::debug!(path = %path.display(), "Go file contains syntax errors");
        }

        Ok(ParsedFile::new(path, source, tree))
    }

    /// Read and parse a Go file from disk
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> IndexResult<ParsedFile> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| IndexError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        self.parse_source(path, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_source_builds_tree() {
        let mut parser = GoParser::new().unwrap();
        let file = parser
            .parse_source("main.go", "package main\n\nfunc main() {}\n")
            .unwrap();

        assert_eq!(file.root_node().kind(), "source_file");
        assert!(!file.root_node().has_error());
        assert_eq!(file.package_name(), Some("main"));
    }

    #[test]
    fn test_syntax_errors_are_not_fatal() {
        let mut parser = GoParser::new().unwrap();
        let file = parser
            .parse_source("broken.go", "package main\n\nvar = \nfunc ok() {}\n")
            .unwrap();

        assert!(file.root_node().has_error());
    }

    #[test]
    fn test_parse_file_reads_from_disk() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "package disk").unwrap();

        let mut parser = GoParser::new().unwrap();
        let file = parser.parse_file(tmp.path()).unwrap();
        assert_eq!(file.package_name(), Some("disk"));
        assert_eq!(file.path(), tmp.path());
    }

    #[test]
    fn test_parse_missing_file_is_file_read_error() {
        let mut parser = GoParser::new().unwrap();
        let err = parser.parse_file("/definitely/not/here.go").unwrap_err();
        assert_eq!(err.status_code(), "FILE_READ_ERROR");
    }
}
