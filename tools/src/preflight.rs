//! Environment checks performed before any test invocation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Marker that we are running from the project root.
pub const MANIFEST_FILE: &str = "package.json";
/// Directory scanned for test files.
pub const TEST_DIR: &str = "tests";

pub fn manifest_present(base: &Path) -> bool {
    base.join(MANIFEST_FILE).exists()
}

/// Entries of `tests/` named `*.test.*`, sorted by name.
///
/// A missing or unreadable directory is an error and propagates; this tool
/// accepts the resulting ungraceful exit.
pub fn discover_test_files(base: &Path) -> Result<Vec<String>> {
    let dir = base.join(TEST_DIR);
    let entries = fs::read_dir(&dir)
        .with_context(|| format!("cannot read test directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if is_test_file(&name) {
            files.push(name);
        }
    }
    files.sort();
    Ok(files)
}

/// Matches `<name>.test.<ext>` — a non-empty stem, a `.test` marker, then
/// one final extension.
fn is_test_file(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) => {
            !ext.is_empty() && stem.len() > ".test".len() && stem.ends_with(".test")
        }
        None => false,
    }
}
