//! Configuration module for the declaration indexer.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `DI_` and use double underscores
//! to separate nested levels:
//! - `DI_INDEXING__PARALLEL_THREADS=8` sets `indexing.parallel_threads`
//! - `DI_INDEXING__EXPAND_MULTI_NAME=true` sets `indexing.expand_multi_name`
//! - `DI_SOURCE__INCLUDE_TESTS=true` sets `source.include_tests`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::{IndexError, IndexResult};

static GLOBAL_DEBUG: AtomicBool = AtomicBool::new(false);

/// Whether `debug_print!` output is enabled process-wide.
pub fn is_global_debug_enabled() -> bool {
    GLOBAL_DEBUG.load(Ordering::Relaxed)
}

pub fn set_global_debug_enabled(enabled: bool) {
    GLOBAL_DEBUG.store(enabled, Ordering::Relaxed);
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Declaration indexing behavior
    #[serde(default)]
    pub indexing: IndexingConfig,

    /// Source discovery for directory loading
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IndexingConfig {
    /// Number of threads used by parallel indexing
    #[serde(default = "default_parallel_threads")]
    pub parallel_threads: usize,

    /// Emit one declaration per name in `var a, b int` instead of only the first
    #[serde(default = "default_false")]
    pub expand_multi_name: bool,

    /// Which token anchors the position of functions and methods
    #[serde(default)]
    pub function_anchor: FunctionAnchor,
}

/// Anchor token for function and method positions.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FunctionAnchor {
    /// The `func` keyword that starts the declaration
    #[default]
    Keyword,
    /// The function or method name
    Name,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SourceConfig {
    /// File extensions treated as Go sources
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Include `_test.go` files when loading a directory
    #[serde(default = "default_false")]
    pub include_tests: bool,

    /// Descend into subdirectories when loading a directory
    #[serde(default = "default_false")]
    pub recursive: bool,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_false() -> bool {
    false
}
fn default_parallel_threads() -> usize {
    num_cpus::get()
}
fn default_extensions() -> Vec<String> {
    vec!["go".to_string()]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: false,
            indexing: IndexingConfig::default(),
            source: SourceConfig::default(),
        }
    }
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            parallel_threads: default_parallel_threads(),
            expand_multi_name: false,
            function_anchor: FunctionAnchor::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            include_tests: false,
            recursive: false,
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> IndexResult<Self> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(".declindex/settings.toml"));

        Self::figment(&config_path).extract().map_err(config_error)
    }

    /// Load configuration from a specific file, still honoring `DI_` overrides
    pub fn load_from(path: impl AsRef<Path>) -> IndexResult<Self> {
        Self::figment(path.as_ref())
            .extract()
            .map_err(config_error)
    }

    fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            // Double underscore separates nested levels
            .merge(Env::prefixed("DI_").split("__"))
    }

    /// Find `.declindex/settings.toml` by searching from the current directory up to root
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .map(|ancestor| ancestor.join(".declindex"))
            .find(|dir| dir.is_dir())
            .map(|dir| dir.join("settings.toml"))
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> IndexResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| IndexError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let toml_string = toml::to_string_pretty(self).map_err(|e| IndexError::ConfigError {
            reason: e.to_string(),
        })?;
        std::fs::write(path, toml_string).map_err(|source| IndexError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Push the `debug` flag into the process-wide switch used by `debug_print!`
    pub fn apply_debug(&self) {
        set_global_debug_enabled(self.debug);
    }
}

fn config_error(e: figment::Error) -> IndexError {
    IndexError::ConfigError {
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.version, 1);
        assert!(settings.indexing.parallel_threads > 0);
        assert!(!settings.indexing.expand_multi_name);
        assert_eq!(settings.indexing.function_anchor, FunctionAnchor::Keyword);
        assert_eq!(settings.source.extensions, vec!["go"]);
        assert!(!settings.source.include_tests);
    }

    #[test]
    fn test_load_from_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");

        let toml_content = r#"
version = 2
debug = true

[indexing]
parallel_threads = 4
expand_multi_name = true
function_anchor = "name"

[source]
include_tests = true
"#;

        fs::write(&config_path, toml_content).unwrap();

        let settings = Settings::load_from(&config_path).unwrap();
        assert_eq!(settings.version, 2);
        assert!(settings.debug);
        assert_eq!(settings.indexing.parallel_threads, 4);
        assert!(settings.indexing.expand_multi_name);
        assert_eq!(settings.indexing.function_anchor, FunctionAnchor::Name);
        assert!(settings.source.include_tests);
        // Untouched values keep their defaults
        assert!(!settings.source.recursive);
        assert_eq!(settings.source.extensions, vec!["go"]);
    }

    #[test]
    fn test_save_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        let mut settings = Settings::default();
        settings.indexing.parallel_threads = 2;
        settings.source.recursive = true;

        settings.save(&config_path).unwrap();

        let loaded = Settings::load_from(&config_path).unwrap();
        assert_eq!(loaded.indexing.parallel_threads, 2);
        assert!(loaded.source.recursive);
    }

    #[test]
    fn test_save_failure_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        // The parent path is a regular file, so the directory cannot be created
        let err = Settings::default()
            .save(blocker.join("settings.toml"))
            .unwrap_err();
        assert!(matches!(&err, IndexError::FileWrite { path, .. } if path == &blocker));
        assert_eq!(err.status_code(), "FILE_WRITE_ERROR");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from(temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(settings.version, 1);
        assert_eq!(settings.indexing.function_anchor, FunctionAnchor::Keyword);
    }

    #[test]
    fn test_invalid_anchor_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[indexing]\nfunction_anchor = \"body\"\n").unwrap();

        let err = Settings::load_from(&config_path).unwrap_err();
        assert_eq!(err.status_code(), "CONFIG_ERROR");
    }
}
