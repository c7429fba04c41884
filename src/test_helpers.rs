//! Shared test utilities for the kompendium test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let content = ContentRegistry::load(Catalog::builtin(), tmp.path()).unwrap();
//! let examples = route(Catalog::builtin(), "Tall og algebra", PageType::Examples);
//! assert!(content.content(&examples).is_authored());
//! ```

use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::catalog::{Catalog, PageType};
use crate::route::Route;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    for entry in WalkDir::new(&fixtures).min_depth(1) {
        let entry = entry.unwrap();
        let target = tmp.path().join(entry.path().strip_prefix(&fixtures).unwrap());
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target).unwrap();
        } else {
            std::fs::copy(entry.path(), &target).unwrap();
        }
    }
    tmp
}

/// Write `contents` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

/// Read `root/relative` to a string. Panics with the path on failure.
pub fn read_file(root: &Path, relative: &str) -> String {
    let path = root.join(relative);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

// =========================================================================
// Catalog lookups (panic with a clear message on miss)
// =========================================================================

/// Route for a chapter (by display name) and page type. Panics if the
/// chapter is not in the catalog.
pub fn route(catalog: &Catalog, chapter: &str, page_type: PageType) -> Route {
    let chapter = catalog.chapter(chapter).unwrap_or_else(|| {
        let names: Vec<&str> = catalog.chapters().iter().map(|c| c.name()).collect();
        panic!("chapter '{chapter}' not found. Available: {names:?}")
    });
    Route::new(chapter, page_type)
}
