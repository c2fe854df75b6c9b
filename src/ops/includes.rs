//! Contract reference extraction for code generation.
//!
//! Scans Solidity sources for contract declarations and keeps those whose
//! compiled artifact already exists, producing the include list handed to
//! the frontend's contract code generator. Foundry lays artifacts out as
//! `out/<File>.sol/<Contract>.json`, so each include is relative to the
//! artifacts directory.
//!
//! This is best effort: a declared but not yet compiled contract is left
//! out rather than reported.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

/// File extension of contract sources.
pub const SOURCE_EXTENSION: &str = ".sol";

/// `contract Name {` or `contract Name is A, B {`.
static CONTRACT_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"contract\s+([a-zA-Z0-9_]+)\s+(?:is\s+[^{]+)?\s*\{")
        .expect("contract declaration pattern is valid")
});

/// A contract declaration found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractInfo {
    /// Source file name, e.g. `Counter.sol`
    pub file_name: String,

    /// Declared contract name, e.g. `Counter`
    pub contract_name: String,
}

impl ContractInfo {
    /// Artifact path relative to the artifacts directory.
    pub fn include_path(&self) -> String {
        format!("{}/{}.json", self.file_name, self.contract_name)
    }
}

/// Contract names declared in `source`, in the order they appear.
pub fn scan_declarations(source: &str) -> impl Iterator<Item = &str> {
    CONTRACT_DECL
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Source files directly inside `src_dir`, sorted by file name.
///
/// Symlinks to files count as sources. A missing or unreadable directory has
/// no sources.
pub fn source_files(src_dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(src_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("skipping source entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.path().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(SOURCE_EXTENSION))
        .map(|entry| entry.into_path())
        .collect()
}

/// Every contract declared in the sources of `src_dir`.
///
/// Files are visited in file name order and declarations in text order.
pub fn find_contracts(src_dir: &Path) -> Vec<ContractInfo> {
    let mut contracts = Vec::new();

    for path in source_files(src_dir) {
        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        // Invalid UTF-8 (in a comment, say) must not hide the declarations
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("skipping unreadable source {}: {}", path.display(), e);
                continue;
            }
        };

        let content = String::from_utf8_lossy(&bytes);
        contracts.extend(scan_declarations(&content).map(|name| ContractInfo {
            file_name: file_name.clone(),
            contract_name: name.to_string(),
        }));
    }

    contracts
}

/// Include paths for every declared contract that has a compiled artifact.
pub fn extract_include_paths(src_dir: &Path, out_dir: &Path) -> Vec<String> {
    find_contracts(src_dir)
        .into_iter()
        .filter(|contract| {
            out_dir
                .join(&contract.file_name)
                .join(format!("{}.json", contract.contract_name))
                .exists()
        })
        .map(|contract| contract.include_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_scan_declarations() {
        let source = r#"
            // SPDX-License-Identifier: MIT
            pragma solidity ^0.8.13;

            contract Foo {
                uint256 public number;
            }

            contract Bar is Foo, Ownable {
            }

            abstract contract Base_2 {}
        "#;

        let names: Vec<_> = scan_declarations(source).collect();
        assert_eq!(names, vec!["Foo", "Bar", "Base_2"]);
    }

    #[test]
    fn test_scan_ignores_interfaces_and_libraries() {
        let source = "interface IFoo {}\nlibrary Math {}\ncontract Real {}";
        let names: Vec<_> = scan_declarations(source).collect();
        assert_eq!(names, vec!["Real"]);
    }

    #[test]
    fn test_scan_requires_space_before_brace() {
        // The pattern needs whitespace after the name; `Tight{` is not a declaration
        let names: Vec<_> = scan_declarations("contract Tight{}").collect();
        assert!(names.is_empty());
    }

    #[test]
    fn test_extract_only_compiled_contracts() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let out = tmp.path().join("out");
        write(
            &src.join("Token.sol"),
            "contract Foo {\n}\ncontract Bar is Foo {\n}\n",
        );
        write(&out.join("Token.sol/Foo.json"), "{}");

        let includes = extract_include_paths(&src, &out);
        assert_eq!(includes, vec!["Token.sol/Foo.json"]);
    }

    #[test]
    fn test_extract_orders_by_file_then_declaration() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let out = tmp.path().join("out");
        write(&src.join("b.sol"), "contract Second {}\ncontract Third {}");
        write(&src.join("a.sol"), "contract First {}");
        for artifact in ["a.sol/First.json", "b.sol/Second.json", "b.sol/Third.json"] {
            write(&out.join(artifact), "{}");
        }

        let includes = extract_include_paths(&src, &out);
        assert_eq!(
            includes,
            vec!["a.sol/First.json", "b.sol/Second.json", "b.sol/Third.json"]
        );
        assert_eq!(extract_include_paths(&src, &out), includes);
    }

    #[test]
    fn test_extract_skips_non_sources() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let out = tmp.path().join("out");
        write(&src.join("README.md"), "contract Doc {}");
        write(&src.join("nested/Deep.sol"), "contract Deep {}");
        fs::create_dir_all(src.join("Dir.sol")).unwrap();
        write(&out.join("README.md/Doc.json"), "{}");
        write(&out.join("Deep.sol/Deep.json"), "{}");

        assert!(extract_include_paths(&src, &out).is_empty());
    }

    #[test]
    fn test_extract_empty_and_missing_src() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();

        assert!(extract_include_paths(&src, &tmp.path().join("out")).is_empty());
        assert!(extract_include_paths(&tmp.path().join("missing"), &tmp.path().join("out")).is_empty());
    }

    #[test]
    fn test_extract_tolerates_invalid_utf8() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let out = tmp.path().join("out");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("A.sol"), b"// caf\xe9\ncontract A {}\n").unwrap();
        write(&out.join("A.sol/A.json"), "{}");

        assert_eq!(extract_include_paths(&src, &out), vec!["A.sol/A.json"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_extract_follows_symlinked_sources() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let out = tmp.path().join("out");
        fs::create_dir_all(&src).unwrap();
        fs::write(tmp.path().join("real.sol"), "contract B {}").unwrap();
        std::os::unix::fs::symlink("../real.sol", src.join("B.sol")).unwrap();
        write(&out.join("B.sol/B.json"), "{}");

        assert_eq!(extract_include_paths(&src, &out), vec!["B.sol/B.json"]);
    }

    #[test]
    fn test_find_contracts_records_file() {
        let tmp = TempDir::new().unwrap();
        write(&tmp.path().join("Counter.sol"), "contract Counter {}");

        let contracts = find_contracts(tmp.path());
        assert_eq!(
            contracts,
            vec![ContractInfo {
                file_name: "Counter.sol".to_string(),
                contract_name: "Counter".to_string(),
            }]
        );
        assert_eq!(contracts[0].include_path(), "Counter.sol/Counter.json");
    }
}
