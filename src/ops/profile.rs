//! Toolchain profile initialization.

use crate::core::errors::SetupError;
use crate::core::project::Project;
use crate::ops::{run_tool, Tools};
use crate::util::process::{Executor, ProcessBuilder};

/// Ensure a dependency-manager toolchain profile exists.
///
/// Runs `conan profile detect` in the project root. Idempotence is the
/// external tool's concern; any non-zero exit propagates as a fatal error.
/// The full setup sequence skips this step unless explicitly opted in.
pub fn ensure_profile(
    exec: &mut dyn Executor,
    tools: &Tools,
    project: &Project,
) -> Result<(), SetupError> {
    tracing::info!("detecting toolchain profile");

    let cmd = ProcessBuilder::new(&tools.conan)
        .args(["profile", "detect"])
        .cwd(project.root());

    let status = run_tool(exec, &cmd, "conan")?;
    if !status.success() {
        return Err(SetupError::ProfileInit {
            code: status.code(),
        });
    }

    Ok(())
}
