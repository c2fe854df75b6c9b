//! Configuration file support for Starter.
//!
//! Starter reads two configuration file locations:
//! - Global: `~/.starter/config.toml` - User-wide defaults
//! - Project: `.starter/config.toml` - Overrides for one working directory
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::framework::{ContractFramework, FrontendFramework};

/// Starter configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Template settings
    pub templates: TemplatesConfig,

    /// Defaults used to pre-fill prompts
    pub defaults: DefaultsConfig,

    /// Project creation settings
    pub new: NewConfig,
}

/// Where templates are read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Template root directory. Relative paths are resolved against the
    /// directory of the config file that set them.
    pub root: Option<PathBuf>,
}

/// Prompt defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Default project name
    pub name: Option<String>,

    /// Default contract framework (foundry, hardhat)
    pub contracts: Option<ContractFramework>,

    /// Default frontend framework (NEXT, VITE)
    pub frontend: Option<FrontendFramework>,
}

/// Project creation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewConfig {
    /// Copy into a staging directory and rename into place on success
    pub staged: Option<bool>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        if let (Some(root), Some(base)) = (config.templates.root.as_ref(), path.parent()) {
            if root.is_relative() {
                // `.starter/config.toml` lives one level below the directory it configures
                let base = if base.file_name().is_some_and(|n| n == CONFIG_DIR_NAME) {
                    base.parent().unwrap_or(base)
                } else {
                    base
                };
                config.templates.root = Some(base.join(root));
            }
        }

        Ok(config)
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.templates.root.is_some() {
            self.templates.root = other.templates.root;
        }

        if other.defaults.name.is_some() {
            self.defaults.name = other.defaults.name;
        }
        if other.defaults.contracts.is_some() {
            self.defaults.contracts = other.defaults.contracts;
        }
        if other.defaults.frontend.is_some() {
            self.defaults.frontend = other.defaults.frontend;
        }

        if other.new.staged.is_some() {
            self.new.staged = other.new.staged;
        }
    }
}

/// Directory holding Starter's config, both globally and per project.
pub const CONFIG_DIR_NAME: &str = ".starter";

/// Get the global starter config directory (~/.starter).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(CONFIG_DIR_NAME))
}

/// Get the global config path (~/.starter/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.starter/config.toml).
pub fn project_config_path(working_directory: &Path) -> PathBuf {
    working_directory.join(CONFIG_DIR_NAME).join("config.toml")
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.starter/config.toml)
/// 2. Global config (~/.starter/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}
