//! `slipway generate` command

use std::sync::Arc;

use anyhow::Result;

use crate::cli::GenerateArgs;
use slipway::core::platform::{GeneratorFlavor, HostPlatform};
use slipway::ops::{self, Tools};
use slipway::util::process::SystemExecutor;
use slipway::util::shell::{Shell, Status};

use super::{diagnose, project_env};

pub fn execute(args: GenerateArgs, shell: &Arc<Shell>) -> Result<()> {
    let (project, config) = project_env()?;
    let tools = Tools::from_config(&config);

    let flavor = match args.flavor {
        Some(flavor) => flavor,
        None => match config.generator.flavor.as_deref() {
            Some(token) => token
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid generator flavor in config: {}", e))?,
            None => GeneratorFlavor::for_host(&HostPlatform::detect()).map_err(diagnose)?,
        },
    };

    let span = shell.span(Status::Generating, format!("{} build files", flavor));

    let mut exec = SystemExecutor::new();
    ops::run_generator(&mut exec, &tools, &project, &flavor).map_err(diagnose)?;

    span.finish_with_message(format!("{} build files", flavor));
    Ok(())
}
