//! High-level operations.
//!
//! This module contains the implementation of Slipway commands. Every
//! operation drives an external tool through the [`Executor`] seam and
//! propagates the first failure without retrying.

pub mod doctor;
pub mod generate;
pub mod profile;
pub mod resolve;
pub mod setup;

pub use doctor::{doctor, format_report, DoctorOptions, DoctorReport};
pub use generate::run_generator;
pub use profile::ensure_profile;
pub use resolve::{resolve_all, resolve_dependencies};
pub use setup::{setup, SetupOptions, SetupReport};

use std::io;
use std::path::PathBuf;

use crate::core::errors::SetupError;
use crate::util::config::Config;
use crate::util::process::{ExecStatus, Executor, ProcessBuilder};

/// Resolved external tool locations.
///
/// Bare names are looked up on PATH by the operating system at spawn time;
/// configured overrides are used verbatim.
#[derive(Debug, Clone)]
pub struct Tools {
    /// Dependency manager binary.
    pub conan: PathBuf,

    /// Project generator binary.
    pub premake: PathBuf,
}

impl Tools {
    /// Resolve tool locations from configuration.
    pub fn from_config(config: &Config) -> Self {
        Tools {
            conan: config
                .tools
                .conan
                .clone()
                .unwrap_or_else(|| PathBuf::from("conan")),
            premake: config
                .tools
                .premake
                .clone()
                .unwrap_or_else(|| PathBuf::from("premake5")),
        }
    }
}

impl Default for Tools {
    fn default() -> Self {
        Tools::from_config(&Config::default())
    }
}

/// Run a planned invocation, mapping a missing binary to [`SetupError::ToolNotFound`].
pub(crate) fn run_tool(
    exec: &mut dyn Executor,
    cmd: &ProcessBuilder,
    tool: &str,
) -> Result<ExecStatus, SetupError> {
    match exec.run(cmd) {
        Ok(status) => Ok(status),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(SetupError::ToolNotFound {
            tool: tool.to_string(),
        }),
        Err(e) => Err(SetupError::Io(e)),
    }
}
