//! Global context for Slipway operations.
//!
//! Provides centralized access to configuration paths and the current
//! working directory, and locates the SDK project from there.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::core::errors::SetupError;
use crate::core::project::Project;

/// Project directories for Slipway
static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("com", "slipway", "slipway"));

/// Global context containing configuration paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Home directory for global Slipway data (~/.slipway/)
    home: PathBuf,
}

impl GlobalContext {
    /// Create a new GlobalContext with defaults.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;

        let home = if let Some(dirs) = PROJECT_DIRS.as_ref() {
            dirs.config_dir().to_path_buf()
        } else {
            // Fallback to ./.slipway when no home directory is resolvable
            PathBuf::from(".slipway")
        };

        Ok(GlobalContext { cwd, home })
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Result<Self> {
        let mut ctx = Self::new()?;
        ctx.cwd = cwd;
        Ok(ctx)
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the Slipway home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Get the global configuration file path.
    pub fn config_path(&self) -> PathBuf {
        self.home.join("config.toml")
    }

    /// Get the project configuration file path for a located project.
    pub fn project_config_path(&self, project: &Project) -> PathBuf {
        project.root().join("slipway.toml")
    }

    /// Locate the SDK project by searching upward from cwd.
    pub fn find_project(&self) -> Result<Project, SetupError> {
        Project::locate(&self.cwd)
    }
}
