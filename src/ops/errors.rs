//! Project initialization errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::framework::TemplateKind;
use crate::util::fs::CopyDirError;

/// Error while creating a new project.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("project name cannot be empty")]
    EmptyProjectName,

    #[error("project name `{name}` must be a relative path inside the working directory")]
    InvalidProjectName { name: String },

    #[error("destination `{}` already exists", .path.display())]
    DirectoryExists { path: PathBuf },

    #[error("{kind} template `{name}` not found at `{}`", .path.display())]
    TemplateNotFound {
        kind: TemplateKind,
        name: String,
        path: PathBuf,
    },

    #[error("failed to copy {kind} template")]
    CopyFailed {
        kind: TemplateKind,
        #[source]
        source: CopyDirError,
    },

    #[error("failed to {action} `{}`", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InitError {
    /// Whether the error happened before anything was written to disk.
    pub fn is_side_effect_free(&self) -> bool {
        matches!(
            self,
            InitError::EmptyProjectName
                | InitError::InvalidProjectName { .. }
                | InitError::DirectoryExists { .. }
                | InitError::TemplateNotFound { .. }
        )
    }
}
