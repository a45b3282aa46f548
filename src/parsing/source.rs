//! Parsed files and the source context handed to the indexer.

use std::path::{Path, PathBuf};
use tree_sitter::{Node, Tree};

use super::position::{LineIndex, Location, PositionResolver};
use crate::IndexResult;

/// One Go source file together with its syntax tree and position table.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    path: PathBuf,
    source: String,
    tree: Tree,
    lines: LineIndex,
    package: Option<String>,
}

impl ParsedFile {
    pub(crate) fn new(path: PathBuf, source: String, tree: Tree) -> Self {
        let lines = LineIndex::new(path.to_string_lossy(), &source);
        let package = package_name(tree.root_node(), &source);

        Self {
            path,
            source,
            tree,
            lines,
            package,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Filename as recorded in resolved positions.
    pub fn filename(&self) -> &str {
        self.lines.filename()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Name from the file's `package` clause, if it has one.
    pub fn package_name(&self) -> Option<&str> {
        self.package.as_deref()
    }
}

impl PositionResolver for ParsedFile {
    fn resolve(&self, offset: usize) -> IndexResult<Location<'_>> {
        self.lines.resolve(offset)
    }
}

fn package_name(root: Node<'_>, source: &str) -> Option<String> {
    let mut cursor = root.walk();
    let clause = root
        .children(&mut cursor)
        .find(|n| n.kind() == "package_clause")?;

    let mut cursor = clause.walk();
    clause
        .children(&mut cursor)
        .find(|n| n.kind() == "package_identifier")
        .map(|n| source[n.byte_range()].to_string())
}

/// Files of one Go package, in the order they were supplied.
#[derive(Debug, Clone)]
pub struct Package {
    pub name: String,
    pub files: Vec<ParsedFile>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
        }
    }
}

/// Read-only input of one indexing call.
#[derive(Debug, Clone, Default)]
pub enum SourceContext {
    /// Nothing to index
    #[default]
    Empty,
    /// A single parsed file
    File(ParsedFile),
    /// Package name to files, enumerated in insertion order
    Packages(Vec<Package>),
}

impl SourceContext {
    pub fn file(file: ParsedFile) -> Self {
        Self::File(file)
    }

    /// Group `files` by their package clause, keeping first-seen order for
    /// packages and input order for files within a package. Files without a
    /// package clause are grouped under an empty name.
    pub fn from_files(files: impl IntoIterator<Item = ParsedFile>) -> Self {
        let mut packages: Vec<Package> = Vec::new();

        for file in files {
            let name = file.package_name().unwrap_or_default().to_string();
            match packages.iter_mut().find(|p| p.name == name) {
                Some(pkg) => pkg.files.push(file),
                None => {
                    let mut pkg = Package::new(name);
                    pkg.files.push(file);
                    packages.push(pkg);
                }
            }
        }

        if packages.is_empty() {
            Self::Empty
        } else {
            Self::Packages(packages)
        }
    }

    /// Every file of the context in traversal order.
    pub fn files(&self) -> Vec<&ParsedFile> {
        match self {
            Self::Empty => Vec::new(),
            Self::File(file) => vec![file],
            Self::Packages(packages) => packages.iter().flat_map(|p| p.files.iter()).collect(),
        }
    }

    pub fn file_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::File(_) => 1,
            Self::Packages(packages) => packages.iter().map(|p| p.files.len()).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.file_count() == 0
    }
}
