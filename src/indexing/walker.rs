//! File system walker for discovering Go sources to index
//!
//! This module provides directory traversal with support for:
//! - .gitignore rules
//! - Extension filtering from configuration
//! - Optional `_test.go` files
//! - Hidden file handling

use crate::Settings;
use crate::parsing::{GoParser, SourceContext};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Walks directories to find Go files
#[derive(Debug)]
pub struct FileWalker {
    settings: Arc<Settings>,
}

impl FileWalker {
    /// Create a new file walker with the given settings
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }

    /// Go files under `root`, sorted by path.
    ///
    /// Only `root` itself is read unless `source.recursive` is set, which
    /// matches how a Go package maps to one directory.
    pub fn walk(&self, root: &Path) -> Vec<PathBuf> {
        let source = &self.settings.source;
        let mut builder = WalkBuilder::new(root);

        builder
            .hidden(true) // Skip hidden files and directories
            .git_ignore(true) // Respect .gitignore files
            .git_exclude(true) // Respect .git/info/exclude
            .follow_links(false)
            .max_depth(if source.recursive { None } else { Some(1) })
            .require_git(false) // Allow gitignore to work in non-git directories
            .sort_by_file_name(|a, b| a.cmp(b));

        builder
            .build()
            .filter_map(Result::ok) // Skip entries we can't access
            .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
            .map(|entry| entry.into_path())
            .filter(|path| self.is_go_source(path))
            .collect()
    }

    fn is_go_source(&self, path: &Path) -> bool {
        let source = &self.settings.source;

        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| source.extensions.iter().any(|e| e == ext));
        if !has_extension {
            return false;
        }

        let is_test = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem.ends_with("_test"));

        source.include_tests || !is_test
    }

    /// Parse every Go file under `root` and group the files by package.
    ///
    /// Files that cannot be read are logged and left out. A missing
    /// directory or one without Go files gives an empty context.
    pub fn load(&self, parser: &mut GoParser, root: &Path) -> SourceContext {
        let paths = self.walk(root);
        debug_print!(self, "load: {} Go files under {}", paths.len(), root.display());

        let files = paths
            .into_iter()
            .filter_map(|path| match parser.parse_file(&path) {
                Ok(file) => Some(file),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping Go file");
                    None
                }
            })
            .collect::<Vec<_>>();

        SourceContext::from_files(files)
    }

    /// Count files that would be loaded (useful for dry runs)
    pub fn count_files(&self, root: &Path) -> usize {
        self.walk(root).len()
    }
}
