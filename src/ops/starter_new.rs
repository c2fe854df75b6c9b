//! Implementation of project creation.
//!
//! A project is two template subtrees copied side by side:
//!
//! ```text
//! <working dir>/<name>/
//!   contracts/   <- <templates>/contracts/<contract framework>
//!   frontend/    <- <templates>/frontend/<frontend framework>
//! ```

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::framework::{ContractFramework, FrontendFramework, TemplateKind};
use crate::core::request::{validate_project_name, ProjectRequest, DEFAULT_PROJECT_NAME};
use crate::ops::errors::InitError;
use crate::util::config::DefaultsConfig;
use crate::util::context::GlobalContext;
use crate::util::fs::{copy_dir_all, CopyStats};
use crate::util::prompt::Prompter;

/// Options for creating a new project.
#[derive(Debug, Clone, Default)]
pub struct NewOptions {
    /// Build the project in a staging directory next to the target and
    /// rename it into place only once both copies succeeded
    pub staged: bool,
}

/// What was created on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Project root
    pub root: PathBuf,

    /// `<root>/contracts` and what was copied into it
    pub contracts: (PathBuf, CopyStats),

    /// `<root>/frontend` and what was copied into it
    pub frontend: (PathBuf, CopyStats),
}

/// Inputs gathered from the command line; anything missing is prompted for.
#[derive(Debug, Clone, Default)]
pub struct RequestInputs {
    pub name: Option<String>,
    pub contracts: Option<ContractFramework>,
    pub frontend: Option<FrontendFramework>,

    /// Take configured defaults instead of prompting
    pub use_defaults: bool,
}

/// Turn partial inputs into a complete request.
///
/// A name given up front is validated, not re-asked: a blank one is an
/// [`InitError::EmptyProjectName`]. A prompted name is re-asked until it is
/// non-blank.
pub fn resolve_request<R: BufRead, W: Write>(
    inputs: RequestInputs,
    defaults: &DefaultsConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<ProjectRequest> {
    let default_name = defaults.name.as_deref().unwrap_or(DEFAULT_PROJECT_NAME);

    let name = match inputs.name {
        Some(name) => name,
        None if inputs.use_defaults => default_name.to_string(),
        None => prompter.input("Enter your project name:", Some(default_name), |answer| {
            validate_project_name(answer)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })?,
    };

    let contracts = match inputs.contracts {
        Some(framework) => framework,
        None if inputs.use_defaults => defaults.contracts.unwrap_or_default(),
        None => prompter.select(
            "Choose a smart contract framework:",
            &ContractFramework::ALL,
            defaults.contracts,
        )?,
    };

    let frontend = match inputs.frontend {
        Some(framework) => framework,
        None if inputs.use_defaults => defaults.frontend.unwrap_or_default(),
        None => prompter.select(
            "Choose a frontend framework:",
            &FrontendFramework::ALL,
            defaults.frontend,
        )?,
    };

    Ok(ProjectRequest::new(name, contracts, frontend)?)
}

/// Create a new project from templates.
///
/// Nothing is written when the name is blank or leaves the working
/// directory, when the destination exists, or when a template is missing. A copy failure without `staged` leaves whatever was
/// already copied in place.
pub fn initialize(
    ctx: &GlobalContext,
    request: &ProjectRequest,
    opts: &NewOptions,
) -> Result<ProjectLayout, InitError> {
    validate_project_name(&request.name)?;
    let target = request.target_path(ctx.working_directory());

    if exists(&target) {
        return Err(InitError::DirectoryExists { path: target });
    }

    let templates = ctx.templates();
    let contracts_src = templates.contracts(request.contract_framework);
    let frontend_src = templates.frontend(request.frontend_framework);
    check_template(
        TemplateKind::Contracts,
        request.contract_framework.dir_name(),
        &contracts_src,
    )?;
    check_template(
        TemplateKind::Frontend,
        request.frontend_framework.dir_name(),
        &frontend_src,
    )?;

    tracing::debug!(
        "creating {} with {} contracts and {} frontend",
        target.display(),
        request.contract_framework,
        request.frontend_framework
    );

    let (contracts, frontend) = if opts.staged {
        populate_staged(ctx.working_directory(), &target, &contracts_src, &frontend_src)?
    } else {
        fs::create_dir(&target).map_err(|source| InitError::Io {
            action: "create directory",
            path: target.clone(),
            source,
        })?;
        populate(&target, &contracts_src, &frontend_src)?
    };

    Ok(ProjectLayout {
        contracts: (target.join(TemplateKind::Contracts.dir_name()), contracts),
        frontend: (target.join(TemplateKind::Frontend.dir_name()), frontend),
        root: target,
    })
}

/// Copy both templates into `root`.
fn populate(
    root: &Path,
    contracts_src: &Path,
    frontend_src: &Path,
) -> Result<(CopyStats, CopyStats), InitError> {
    let copy = |kind: TemplateKind, src: &Path| {
        copy_dir_all(src, &root.join(kind.dir_name()))
            .map_err(|source| InitError::CopyFailed { kind, source })
    };

    let contracts = copy(TemplateKind::Contracts, contracts_src)?;
    let frontend = copy(TemplateKind::Frontend, frontend_src)?;
    Ok((contracts, frontend))
}

fn populate_staged(
    working_directory: &Path,
    target: &Path,
    contracts_src: &Path,
    frontend_src: &Path,
) -> Result<(CopyStats, CopyStats), InitError> {
    // Staging inside the working directory keeps the final rename on one filesystem
    let staging = tempfile::Builder::new()
        .prefix(".starter-")
        .tempdir_in(working_directory)
        .map_err(|source| InitError::Io {
            action: "create staging directory in",
            path: working_directory.to_path_buf(),
            source,
        })?;

    // On error `staging` is dropped here and removed with its contents
    let stats = populate(staging.path(), contracts_src, frontend_src)?;

    if exists(target) {
        return Err(InitError::DirectoryExists {
            path: target.to_path_buf(),
        });
    }

    fs::rename(staging.path(), target).map_err(|source| InitError::Io {
        action: "move staged project to",
        path: target.to_path_buf(),
        source,
    })?;

    // The staging path is gone after the rename; dropping `staging` ignores that.
    drop(staging);
    Ok(stats)
}

fn check_template(kind: TemplateKind, name: &str, path: &Path) -> Result<(), InitError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(InitError::TemplateNotFound {
            kind,
            name: name.to_string(),
            path: path.to_path_buf(),
        })
    }
}

/// True for anything at `path`, including a dangling symlink.
fn exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}
