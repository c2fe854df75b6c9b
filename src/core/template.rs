//! Template root layout.
//!
//! A template root holds one self-contained tree per framework:
//!
//! ```text
//! <root>/
//!   contracts/foundry/
//!   contracts/hardhat/
//!   frontend/NEXT/
//!   frontend/VITE/
//! ```

use std::path::{Path, PathBuf};

use crate::core::framework::{ContractFramework, FrontendFramework, TemplateKind};

/// Name of the template directory shipped next to the binary.
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// A directory containing contract and frontend templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRoot {
    root: PathBuf,
}

/// One template subtree and whether it is present on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub kind: TemplateKind,
    pub name: &'static str,
    pub path: PathBuf,
    pub present: bool,
}

impl TemplateRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        TemplateRoot { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Source tree for a contract framework.
    pub fn contracts(&self, framework: ContractFramework) -> PathBuf {
        self.subtree(TemplateKind::Contracts, framework.dir_name())
    }

    /// Source tree for a frontend framework.
    pub fn frontend(&self, framework: FrontendFramework) -> PathBuf {
        self.subtree(TemplateKind::Frontend, framework.dir_name())
    }

    fn subtree(&self, kind: TemplateKind, name: &str) -> PathBuf {
        self.root.join(kind.dir_name()).join(name)
    }

    /// Every known template, in prompt order, with its presence on disk.
    pub fn entries(&self) -> Vec<TemplateEntry> {
        let contracts = ContractFramework::ALL
            .iter()
            .map(|f| (TemplateKind::Contracts, f.dir_name()));
        let frontends = FrontendFramework::ALL
            .iter()
            .map(|f| (TemplateKind::Frontend, f.dir_name()));

        contracts
            .chain(frontends)
            .map(|(kind, name)| {
                let path = self.subtree(kind, name);
                TemplateEntry {
                    kind,
                    name,
                    present: path.is_dir(),
                    path,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_subtree_paths() {
        let root = TemplateRoot::new("/opt/starter/templates");
        assert_eq!(
            root.contracts(ContractFramework::Hardhat),
            PathBuf::from("/opt/starter/templates/contracts/hardhat")
        );
        assert_eq!(
            root.frontend(FrontendFramework::Next),
            PathBuf::from("/opt/starter/templates/frontend/NEXT")
        );
    }

    #[test]
    fn test_entries_report_presence() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("contracts/foundry")).unwrap();
        std::fs::create_dir_all(tmp.path().join("frontend/VITE")).unwrap();

        let entries = TemplateRoot::new(tmp.path()).entries();
        let present: Vec<_> = entries
            .iter()
            .filter(|e| e.present)
            .map(|e| format!("{}/{}", e.kind, e.name))
            .collect();

        assert_eq!(entries.len(), 4);
        assert_eq!(present, vec!["contracts/foundry", "frontend/VITE"]);
    }
}
