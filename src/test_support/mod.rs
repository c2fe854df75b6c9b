//! Test utilities for Starter unit tests.

pub mod fixtures;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

pub use fixtures::*;

/// Every entry under `root`, relative to it, with file contents.
///
/// Directories map to `None`.
pub fn snapshot_tree(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let relative = entry.path().strip_prefix(root).unwrap().to_path_buf();
            let content = if entry.file_type().is_dir() {
                None
            } else {
                Some(fs::read(entry.path()).unwrap())
            };
            (relative, content)
        })
        .collect()
}

/// Assert that two directory trees have the same structure and bytes.
pub fn assert_trees_equal(expected: &Path, actual: &Path) {
    let expected_tree = snapshot_tree(expected);
    let actual_tree = snapshot_tree(actual);

    assert!(!expected_tree.is_empty(), "{} is empty", expected.display());
    assert_eq!(
        expected_tree.keys().collect::<Vec<_>>(),
        actual_tree.keys().collect::<Vec<_>>(),
        "entries differ between {} and {}",
        expected.display(),
        actual.display()
    );
    for (path, content) in &expected_tree {
        assert_eq!(
            content,
            &actual_tree[path],
            "contents differ for {}",
            path.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_fixture_has_all_templates() {
        let fixture = TemplateFixture::standard();
        for dir in ["contracts/foundry", "contracts/hardhat", "frontend/NEXT", "frontend/VITE"] {
            assert!(fixture.root().join(dir).is_dir(), "missing {}", dir);
        }
    }

    #[test]
    fn test_snapshot_tree_includes_dirs_and_files() {
        let fixture = TemplateFixture::empty();
        fixture.add_file("a/b.txt", "hi");

        let tree = snapshot_tree(fixture.root());
        assert_eq!(tree[Path::new("a")], None);
        assert_eq!(tree[Path::new("a/b.txt")], Some(b"hi".to_vec()));
    }
}
