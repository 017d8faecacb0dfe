//! Setup error types and diagnostics.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::build_config::BuildConfig;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error during build environment setup.
///
/// Every variant is fatal: the orchestration never retries or recovers, it
/// propagates the first failure and stops. External tool output is not
/// captured or rewritten; these errors only describe what Slipway itself
/// observed (a missing tool, a non-zero exit, an unmappable host).
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("`{tool}` not found on PATH")]
    ToolNotFound { tool: String },

    #[error("toolchain profile detection failed{}", exit_code_suffix(.code))]
    ProfileInit { code: Option<i32> },

    #[error("dependency resolution for {config} failed{}", exit_code_suffix(.code))]
    Resolution { config: BuildConfig, code: Option<i32> },

    #[error("unsupported host platform `{os}`")]
    UnsupportedPlatform { os: String },

    #[error("project generation failed{}", exit_code_suffix(.code))]
    Generation { code: Option<i32> },

    #[error("no dependency manifest (conanfile.py or conanfile.txt) found in `{dir}` or any parent directory")]
    ProjectNotFound { dir: PathBuf },

    #[error("no generator script (premake5.lua) found in `{dir}`")]
    GeneratorScriptMissing { dir: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn exit_code_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit code {})", code),
        None => " (terminated by signal)".to_string(),
    }
}

impl SetupError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            SetupError::ToolNotFound { tool } => {
                let diag = Diagnostic::error(self.to_string());
                match tool.as_str() {
                    "conan" => diag.with_suggestion(suggestions::INSTALL_CONAN),
                    "premake5" => diag.with_suggestion(suggestions::INSTALL_PREMAKE),
                    _ => diag.with_suggestion(suggestions::RUN_DOCTOR),
                }
            }

            SetupError::ProfileInit { .. } => {
                Diagnostic::error(self.to_string()).with_suggestion(suggestions::PROFILE_FAILED)
            }

            SetupError::Resolution { config, .. } => Diagnostic::error(self.to_string())
                .with_context(format!(
                    "the dependency cache for {} is incomplete; generation was not attempted",
                    config
                ))
                .with_suggestion(suggestions::RESOLUTION_FAILED),

            SetupError::UnsupportedPlatform { .. } => {
                Diagnostic::error(self.to_string()).with_suggestion(suggestions::UNSUPPORTED_HOST)
            }

            SetupError::Generation { .. } => {
                Diagnostic::error(self.to_string()).with_suggestion(suggestions::GENERATION_FAILED)
            }

            SetupError::ProjectNotFound { .. } => {
                Diagnostic::error(self.to_string()).with_suggestion(suggestions::NO_MANIFEST)
            }

            SetupError::GeneratorScriptMissing { .. } => {
                Diagnostic::error(self.to_string()).with_suggestion(suggestions::NO_GENERATOR_SCRIPT)
            }

            SetupError::Io(_) => Diagnostic::error(self.to_string()),
        }
    }
}
