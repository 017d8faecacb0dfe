//! `slipway deps` command

use std::sync::Arc;

use anyhow::Result;

use crate::cli::DepsArgs;
use slipway::ops::{self, Tools};
use slipway::util::process::SystemExecutor;
use slipway::util::shell::{Shell, Status};

use super::{diagnose, project_env};

pub fn execute(args: DepsArgs, shell: &Arc<Shell>) -> Result<()> {
    let (project, config) = project_env()?;
    let tools = Tools::from_config(&config);

    let configs = if args.config.is_empty() {
        config.configs()
    } else {
        args.config
    };

    let mut exec = SystemExecutor::new();
    for build_config in &configs {
        let span = shell.span(
            Status::Resolving,
            format!("dependencies for {}", build_config),
        );
        ops::resolve_dependencies(&mut exec, &tools, &project, *build_config)
            .map_err(diagnose)?;
        span.finish_with_message(format!("{} dependencies", build_config));
    }

    Ok(())
}
