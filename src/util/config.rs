//! Configuration file support for Slipway.
//!
//! Slipway supports two configuration file locations:
//! - Global: `~/.slipway/config.toml` - User-wide defaults
//! - Project: `slipway.toml` in the project root - Project-specific overrides
//!
//! Project config takes precedence over global config, and CLI flags over
//! both. With no configuration present at all, behavior is the fixed
//! default: resolve Debug then Release, profile init off, host-detected
//! generator flavor.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::build_config::BuildConfig;

/// Slipway configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External tool locations
    pub tools: ToolsConfig,

    /// Setup sequencing settings
    pub setup: SetupConfig,

    /// Project generator settings
    pub generator: GeneratorConfig,
}

/// Overrides for the external tool binaries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Path to the dependency manager (defaults to `conan` on PATH)
    pub conan: Option<PathBuf>,

    /// Path to the project generator (defaults to `premake5` on PATH)
    pub premake: Option<PathBuf>,
}

/// Settings for the full setup sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Build configurations to resolve, in order (defaults to Debug, Release)
    pub configs: Option<Vec<BuildConfig>>,

    /// Run `conan profile detect` before resolving (defaults to false)
    pub profile_init: bool,
}

/// Settings for the generation step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Generator flavor token, bypassing host detection (e.g. "vs2019")
    pub flavor: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.tools.conan.is_some() {
            self.tools.conan = other.tools.conan;
        }
        if other.tools.premake.is_some() {
            self.tools.premake = other.tools.premake;
        }
        if other.setup.configs.is_some() {
            self.setup.configs = other.setup.configs;
        }
        if other.setup.profile_init {
            self.setup.profile_init = true;
        }
        if other.generator.flavor.is_some() {
            self.generator.flavor = other.generator.flavor;
        }
    }

    /// The configuration sequence to resolve, falling back to the fixed
    /// Debug-then-Release default.
    pub fn configs(&self) -> Vec<BuildConfig> {
        self.setup
            .configs
            .clone()
            .unwrap_or_else(BuildConfig::default_sequence)
    }
}

/// Load the effective configuration (global, then project overrides).
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::load_or_default(global_path);
    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }
    config
}
