//! Dependency resolution passes.

use crate::core::build_config::BuildConfig;
use crate::core::errors::SetupError;
use crate::core::project::Project;
use crate::ops::{run_tool, Tools};
use crate::util::process::{Executor, ProcessBuilder};

/// Resolve third-party dependencies for one build configuration.
///
/// Runs `conan install . --build=missing --settings=build_type=<config>`
/// in the project root, populating the local dependency cache and the
/// generator integration files for that configuration. A non-zero exit is
/// fatal for the whole orchestration: generation must never run against a
/// known-incomplete dependency set.
pub fn resolve_dependencies(
    exec: &mut dyn Executor,
    tools: &Tools,
    project: &Project,
    config: BuildConfig,
) -> Result<(), SetupError> {
    tracing::info!("resolving dependencies for {}", config);

    let cmd = ProcessBuilder::new(&tools.conan)
        .args(["install", "."])
        .arg("--build=missing")
        .arg(format!("--settings=build_type={}", config.as_setting()))
        .cwd(project.root());

    let status = run_tool(exec, &cmd, "conan")?;
    if !status.success() {
        return Err(SetupError::Resolution {
            config,
            code: status.code(),
        });
    }

    Ok(())
}

/// Resolve every configuration in `configs`, strictly in order.
///
/// The passes share the local dependency cache, so they are never
/// parallelized; the first failure aborts the remainder.
pub fn resolve_all(
    exec: &mut dyn Executor,
    tools: &Tools,
    project: &Project,
    configs: &[BuildConfig],
) -> Result<(), SetupError> {
    for config in configs {
        resolve_dependencies(exec, tools, project, *config)?;
    }
    Ok(())
}
