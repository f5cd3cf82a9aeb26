//! Assertion helpers for published trees.

use std::os::unix::fs::MetadataExt;
use std::path::Path;

/// List all entries below a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Permission bits of a path, without following symlinks
pub fn mode_of(path: &Path) -> u32 {
    std::fs::symlink_metadata(path)
        .unwrap_or_else(|e| panic!("stat {}: {}", path.display(), e))
        .mode()
        & 0o7777
}

/// Assert that a directory holds no entries at all
pub fn assert_empty_dir(dir: &Path) {
    let leftovers = list_all_files(dir);
    let count = std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0);
    assert_eq!(
        count,
        0,
        "Expected '{}' to be empty, found:\n  {}",
        dir.display(),
        leftovers.join("\n  ")
    );
}

/// Assert the 0660/0770 invariant under a subtree
pub fn assert_normalized(subtree: &Path) {
    for entry in walkdir::WalkDir::new(subtree) {
        let entry = entry.unwrap();
        let expected = if entry.file_type().is_dir() { 0o770 } else { 0o660 };
        assert_eq!(
            mode_of(entry.path()),
            expected,
            "wrong mode on {}",
            entry.path().display()
        );
    }
}

/// Assert that output contains a substring, with the full output on failure
#[macro_export]
macro_rules! assert_output_contains {
    ($output:expr, $needle:expr) => {
        assert!(
            $output.contains($needle),
            "Expected output to contain '{}'.\nActual output:\n{}",
            $needle,
            $output
        );
    };
}
