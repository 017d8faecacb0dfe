//! `slipway profile` command

use std::sync::Arc;

use anyhow::Result;

use slipway::ops::{self, Tools};
use slipway::util::process::SystemExecutor;
use slipway::util::shell::{Shell, Status};

use super::{diagnose, project_env};

pub fn execute(shell: &Arc<Shell>) -> Result<()> {
    let (project, config) = project_env()?;
    let tools = Tools::from_config(&config);

    let span = shell.span(Status::Checking, "toolchain profile");

    let mut exec = SystemExecutor::new();
    ops::ensure_profile(&mut exec, &tools, &project).map_err(diagnose)?;

    span.finish_with_message("toolchain profile");
    Ok(())
}
