//! Code generator configuration for a generated project's frontend.
//!
//! The frontend generates typed contract bindings from compiled artifacts.
//! Its configuration names the output file and a plugin list; the contracts
//! plugin receives the include list from [`extract_include_paths`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ops::includes::extract_include_paths;

/// Default generated bindings file, relative to the frontend package.
pub const DEFAULT_GENERATED_FILE: &str = "src/generated.ts";

/// Default contract sources directory, relative to the contracts project.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Default artifacts directory, relative to the contracts project.
pub const DEFAULT_ARTIFACTS_DIR: &str = "out";

/// Top-level code generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// Generated bindings file
    pub out: String,

    /// Plugins, in the order the generator runs them
    pub plugins: Vec<Plugin>,
}

/// A code generator plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum Plugin {
    /// Reads compiled contract artifacts.
    Foundry {
        project: String,
        artifacts: String,
        include: Vec<String>,
    },
    /// Emits React hooks for the contracts.
    React,
}

/// Where to find the contracts project and where bindings go.
#[derive(Debug, Clone)]
pub struct CodegenOptions {
    /// Contracts project directory
    pub project: PathBuf,

    /// Sources directory, relative to `project`
    pub src: PathBuf,

    /// Artifacts directory, relative to `project`
    pub artifacts: PathBuf,

    /// Generated bindings file
    pub out: PathBuf,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        CodegenOptions {
            project: PathBuf::from("../contracts"),
            src: PathBuf::from(DEFAULT_SOURCE_DIR),
            artifacts: PathBuf::from(DEFAULT_ARTIFACTS_DIR),
            out: PathBuf::from(DEFAULT_GENERATED_FILE),
        }
    }
}

impl CodegenOptions {
    pub fn src_dir(&self) -> PathBuf {
        self.project.join(&self.src)
    }

    pub fn artifacts_dir(&self) -> PathBuf {
        self.project.join(&self.artifacts)
    }
}

/// Build the generator configuration, scanning sources for includes.
///
/// `base` resolves relative paths in `opts` for the scan; the paths written
/// into the configuration stay as given.
pub fn codegen_config(base: &Path, opts: &CodegenOptions) -> CodegenConfig {
    let include = extract_include_paths(&base.join(opts.src_dir()), &base.join(opts.artifacts_dir()));

    CodegenConfig {
        out: path_string(&opts.out),
        plugins: vec![
            Plugin::Foundry {
                project: path_string(&opts.project),
                artifacts: path_string(&opts.artifacts),
                include,
            },
            Plugin::React,
        ],
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
