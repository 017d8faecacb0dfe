//! The full build environment setup sequence.

use crate::core::build_config::BuildConfig;
use crate::core::errors::SetupError;
use crate::core::platform::{GeneratorFlavor, HostPlatform};
use crate::core::project::Project;
use crate::ops::{ensure_profile, resolve_all, run_generator, Tools};
use crate::util::process::Executor;

/// Options for the setup sequence.
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Run the toolchain profile detection step first (off by default).
    pub profile_init: bool,

    /// Build configurations to resolve, in order.
    pub configs: Vec<BuildConfig>,

    /// Generator flavor override; `None` maps the detected host.
    pub flavor: Option<GeneratorFlavor>,
}

impl Default for SetupOptions {
    fn default() -> Self {
        SetupOptions {
            profile_init: false,
            configs: BuildConfig::default_sequence(),
            flavor: None,
        }
    }
}

/// What a completed setup run did.
#[derive(Debug, Clone)]
pub struct SetupReport {
    /// Whether the profile step ran.
    pub profile_initialized: bool,

    /// Configurations resolved, in order.
    pub resolved: Vec<BuildConfig>,

    /// Flavor the generator was invoked with.
    pub flavor: GeneratorFlavor,
}

/// Run the whole sequence: profile (opt-in), one resolution pass per
/// configuration, then generation.
///
/// Strictly sequential with no retry and no rollback; the first failure
/// aborts every remaining step. The generator flavor is fixed up front so
/// an unsupported host fails before any resolution work starts.
pub fn setup(
    exec: &mut dyn Executor,
    tools: &Tools,
    project: &Project,
    opts: &SetupOptions,
) -> Result<SetupReport, SetupError> {
    let flavor = match &opts.flavor {
        Some(flavor) => flavor.clone(),
        None => GeneratorFlavor::for_host(&HostPlatform::detect())?,
    };

    if opts.profile_init {
        ensure_profile(exec, tools, project)?;
    }

    resolve_all(exec, tools, project, &opts.configs)?;
    run_generator(exec, tools, project, &flavor)?;

    Ok(SetupReport {
        profile_initialized: opts.profile_init,
        resolved: opts.configs.clone(),
        flavor,
    })
}
