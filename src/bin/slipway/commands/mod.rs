//! Command implementations

pub mod completions;
pub mod deps;
pub mod doctor;
pub mod generate;
pub mod profile;
pub mod setup;

use anyhow::anyhow;

use slipway::core::errors::SetupError;
use slipway::util::config::{load_config, Config};
use slipway::util::GlobalContext;
use slipway::Project;

/// Locate the project from cwd and load the effective configuration
/// (global config, then project `slipway.toml` overrides).
pub(crate) fn project_env() -> anyhow::Result<(Project, Config)> {
    let ctx = GlobalContext::new()?;
    let project = ctx.find_project().map_err(diagnose)?;
    let config = load_config(&ctx.config_path(), &ctx.project_config_path(&project));
    Ok((project, config))
}

/// Render a setup error with its diagnostic help text.
pub(crate) fn diagnose(err: SetupError) -> anyhow::Error {
    anyhow!("{}", err.to_diagnostic())
}
