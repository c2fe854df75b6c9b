//! Test fixtures for common test scenarios.
//!
//! This module provides pre-built template roots shaped like the ones
//! shipped with Starter.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A template root on disk, removed when dropped.
#[derive(Debug)]
pub struct TemplateFixture {
    dir: TempDir,
}

impl TemplateFixture {
    /// Create an empty template root.
    pub fn empty() -> Self {
        TemplateFixture {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Create a template root with all four templates populated.
    pub fn standard() -> Self {
        let fixture = Self::empty();

        fixture.add_file("contracts/foundry/foundry.toml", "[profile.default]\nsrc = \"src\"\n");
        fixture.add_file(
            "contracts/foundry/src/Counter.sol",
            "pragma solidity ^0.8.13;\n\ncontract Counter {\n    uint256 public number;\n}\n",
        );
        fixture.add_file("contracts/foundry/lib/.gitkeep", "");

        fixture.add_file("contracts/hardhat/hardhat.config.ts", "export default {};\n");
        fixture.add_file(
            "contracts/hardhat/contracts/Lock.sol",
            "contract Lock {\n}\n",
        );

        fixture.add_file("frontend/NEXT/package.json", "{ \"name\": \"web\" }\n");
        fixture.add_file("frontend/NEXT/src/app/page.tsx", "export default function Page() {}\n");

        fixture.add_file("frontend/VITE/package.json", "{ \"name\": \"web\" }\n");
        fixture.add_file("frontend/VITE/index.html", "<div id=\"root\"></div>\n");
        fixture.add_binary("frontend/VITE/public/favicon.ico", &[0, 0, 1, 0, 255, 254]);

        fixture
    }

    /// Template root directory.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Add a text file relative to the root.
    pub fn add_file(&self, relative: impl AsRef<Path>, content: &str) -> PathBuf {
        self.add_binary(relative, content.as_bytes())
    }

    /// Add a file with arbitrary bytes relative to the root.
    pub fn add_binary(&self, relative: impl AsRef<Path>, content: &[u8]) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}
