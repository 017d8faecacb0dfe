//! Project generation.

use crate::core::errors::SetupError;
use crate::core::platform::GeneratorFlavor;
use crate::core::project::Project;
use crate::ops::{run_tool, Tools};
use crate::util::process::{Executor, ProcessBuilder};

/// Invoke the project generator with the given flavor.
///
/// Runs `premake5 <flavor>` in the project root; the generator script
/// decides where the build files land. The flavor is chosen by the caller,
/// either from the host mapping or from an explicit override, so the host
/// is never re-queried here.
pub fn run_generator(
    exec: &mut dyn Executor,
    tools: &Tools,
    project: &Project,
    flavor: &GeneratorFlavor,
) -> Result<(), SetupError> {
    if project.generator_script().is_none() {
        return Err(SetupError::GeneratorScriptMissing {
            dir: project.root().to_path_buf(),
        });
    }

    tracing::info!("generating {} build files", flavor);

    let cmd = ProcessBuilder::new(&tools.premake)
        .arg(flavor.as_token())
        .cwd(project.root());

    let status = run_tool(exec, &cmd, "premake5")?;
    if !status.success() {
        return Err(SetupError::Generation {
            code: status.code(),
        });
    }

    Ok(())
}
