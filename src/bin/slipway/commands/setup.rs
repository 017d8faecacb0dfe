//! `slipway setup` command

use std::sync::Arc;

use anyhow::Result;

use crate::cli::SetupArgs;
use slipway::ops::{self, SetupOptions, Tools};
use slipway::util::process::SystemExecutor;
use slipway::util::shell::{Shell, Status};

use super::{diagnose, project_env};

pub fn execute(args: SetupArgs, shell: &Arc<Shell>) -> Result<()> {
    let (project, config) = project_env()?;
    let tools = Tools::from_config(&config);

    // CLI overrides config, config overrides the fixed defaults
    let configs = if args.config.is_empty() {
        config.configs()
    } else {
        args.config
    };
    let flavor = match args.flavor {
        Some(flavor) => Some(flavor),
        None => config
            .generator
            .flavor
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(|e| anyhow::anyhow!("invalid generator flavor in config: {}", e))?,
    };

    let opts = SetupOptions {
        profile_init: args.profile || config.setup.profile_init,
        configs,
        flavor,
    };

    let span = shell.span(
        Status::Running,
        format!("setup in {}", project.root().display()),
    );

    let mut exec = SystemExecutor::new();
    let report = ops::setup(&mut exec, &tools, &project, &opts).map_err(diagnose)?;

    span.finish_with_message(format!(
        "setup: {} configuration(s) resolved, {} build files generated",
        report.resolved.len(),
        report.flavor
    ));

    Ok(())
}
