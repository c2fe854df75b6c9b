//! Framework choices offered when creating a project.
//!
//! Each variant maps to one subdirectory of the template root, so the
//! directory name is part of the contract and must match the on-disk
//! layout exactly (`contracts/foundry`, `frontend/NEXT`, ...).

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smart-contract toolchain for the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContractFramework {
    #[default]
    #[serde(rename = "foundry")]
    Foundry,
    #[serde(rename = "hardhat")]
    Hardhat,
}

impl ContractFramework {
    /// All choices, in prompt order.
    pub const ALL: [ContractFramework; 2] = [ContractFramework::Foundry, ContractFramework::Hardhat];

    /// Directory name under `<templates>/contracts/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ContractFramework::Foundry => "foundry",
            ContractFramework::Hardhat => "hardhat",
        }
    }
}

impl fmt::Display for ContractFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl std::str::FromStr for ContractFramework {
    type Err = FrameworkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "foundry" | "forge" => Ok(ContractFramework::Foundry),
            "hardhat" => Ok(ContractFramework::Hardhat),
            _ => Err(FrameworkParseError {
                kind: TemplateKind::Contracts,
                value: s.to_string(),
            }),
        }
    }
}

/// Web UI toolchain for the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FrontendFramework {
    #[default]
    #[serde(rename = "NEXT", alias = "next")]
    Next,
    #[serde(rename = "VITE", alias = "vite")]
    Vite,
}

impl FrontendFramework {
    /// All choices, in prompt order.
    pub const ALL: [FrontendFramework; 2] = [FrontendFramework::Next, FrontendFramework::Vite];

    /// Directory name under `<templates>/frontend/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            FrontendFramework::Next => "NEXT",
            FrontendFramework::Vite => "VITE",
        }
    }
}

impl fmt::Display for FrontendFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl std::str::FromStr for FrontendFramework {
    type Err = FrameworkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "next" | "nextjs" => Ok(FrontendFramework::Next),
            "vite" => Ok(FrontendFramework::Vite),
            _ => Err(FrameworkParseError {
                kind: TemplateKind::Frontend,
                value: s.to_string(),
            }),
        }
    }
}

/// The two template families under the template root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Contracts,
    Frontend,
}

impl TemplateKind {
    /// Directory name under the template root, reused as the destination
    /// directory inside the generated project.
    pub fn dir_name(&self) -> &'static str {
        match self {
            TemplateKind::Contracts => "contracts",
            TemplateKind::Frontend => "frontend",
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            TemplateKind::Contracts => "'foundry' or 'hardhat'",
            TemplateKind::Frontend => "'NEXT' or 'VITE'",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Error returned when parsing an unknown framework name.
#[derive(Debug, Clone, Error)]
#[error("invalid {kind} framework '{value}'; expected {}", .kind.expected())]
pub struct FrameworkParseError {
    pub kind: TemplateKind,
    pub value: String,
}
