#![allow(dead_code)]

use declindex::{GoParser, ParsedFile, Settings, SourceContext};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const GEOMETRY_DIR: &str = "tests/fixtures/go/geometry";
pub const RUNTIME_STUBS: &str = "tests/fixtures/go/runtime/stubs.go";

pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.dir.path().join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Route tracing output through the test harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn parse_fixture(path: &str) -> ParsedFile {
    GoParser::new()
        .expect("Failed to create Go parser")
        .parse_file(path)
        .expect("Failed to parse fixture")
}

pub fn source_context(name: &str, code: &str) -> SourceContext {
    let file = GoParser::new()
        .expect("Failed to create Go parser")
        .parse_source(name, code)
        .expect("Failed to parse source");
    SourceContext::file(file)
}

pub fn settings() -> Settings {
    let mut settings = Settings::default();
    settings.indexing.parallel_threads = 2;
    settings
}
