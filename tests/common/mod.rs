//! Common test infrastructure for Tilepix integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;

pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to `tilepix.yaml` inside a fresh temporary directory.
///
/// The directory is removed when the returned guard is dropped.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("tilepix.yaml");
    std::fs::write(&path, content).expect("write config");
    (dir, path)
}
