//! The inputs needed to materialize a project.

use std::path::{Component, Path, PathBuf};

use crate::core::framework::{ContractFramework, FrontendFramework};
use crate::ops::errors::InitError;

/// Project name used when the user accepts the prompt default.
pub const DEFAULT_PROJECT_NAME: &str = "my-web3-app";

/// A fully specified project creation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    /// Directory name of the new project, relative to the working directory.
    pub name: String,

    /// Template copied into `<project>/contracts`.
    pub contract_framework: ContractFramework,

    /// Template copied into `<project>/frontend`.
    pub frontend_framework: FrontendFramework,
}

impl ProjectRequest {
    /// Build a request, rejecting names [`validate_project_name`] refuses.
    ///
    /// Surrounding whitespace is trimmed from the name.
    pub fn new(
        name: impl AsRef<str>,
        contract_framework: ContractFramework,
        frontend_framework: FrontendFramework,
    ) -> Result<Self, InitError> {
        let name = validate_project_name(name.as_ref())?;
        Ok(ProjectRequest {
            name: name.to_string(),
            contract_framework,
            frontend_framework,
        })
    }

    /// Path the project will be created at.
    pub fn target_path(&self, working_directory: &Path) -> PathBuf {
        working_directory.join(&self.name)
    }
}

/// Check that a project name is usable and return it trimmed.
///
/// The name must stay below the working directory: absolute paths, drive
/// prefixes and `..` components are rejected.
pub fn validate_project_name(name: &str) -> Result<&str, InitError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(InitError::EmptyProjectName);
    }

    let escapes = Path::new(trimmed).components().any(|c| {
        matches!(
            c,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    });
    if escapes {
        return Err(InitError::InvalidProjectName {
            name: trimmed.to_string(),
        });
    }

    Ok(trimmed)
}
