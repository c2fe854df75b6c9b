//! Global context for Starter operations.
//!
//! Everything an operation would otherwise read from the process (the
//! working directory, the template location, user configuration) is carried
//! here explicitly so operations stay independent of ambient state.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::template::{TemplateRoot, TEMPLATES_DIR_NAME};
use crate::util::config::{global_config_path, load_config, project_config_path, Config};

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Directory new projects are created in
    working_directory: PathBuf,

    /// Template root new projects are copied from
    templates: TemplateRoot,

    /// Merged user configuration
    config: Config,
}

impl GlobalContext {
    /// Create a context from explicit paths, with default configuration.
    pub fn new(working_directory: impl Into<PathBuf>, templates_root: impl Into<PathBuf>) -> Self {
        GlobalContext {
            working_directory: working_directory.into(),
            templates: TemplateRoot::new(templates_root),
            config: Config::default(),
        }
    }

    /// Create a context for the running process.
    ///
    /// The template root is chosen in this order:
    /// 1. `templates_override` (command line or `STARTER_TEMPLATES`)
    /// 2. `[templates] root` from configuration
    /// 3. `templates/` next to the executable's directory
    /// 4. `templates/` in the working directory
    pub fn from_env(templates_override: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        let config = load_config(global_config_path().as_deref(), &project_config_path(&cwd));

        let templates_root = templates_override
            .map(|p| if p.is_relative() { cwd.join(p) } else { p })
            .or_else(|| config.templates.root.clone())
            .or_else(bundled_templates_dir)
            .unwrap_or_else(|| cwd.join(TEMPLATES_DIR_NAME));

        tracing::debug!("using templates from {}", templates_root.display());

        Ok(GlobalContext::new(cwd, templates_root).with_config(config))
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Get the working directory.
    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    /// Get the template root.
    pub fn templates(&self) -> &TemplateRoot {
        &self.templates
    }

    /// Get the merged configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// `<exe dir>/../templates`, the layout of an installed release.
fn bundled_templates_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let dir = exe.parent()?.parent()?.join(TEMPLATES_DIR_NAME);
    dir.is_dir().then_some(dir)
}
