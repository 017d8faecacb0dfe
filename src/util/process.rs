//! Subprocess execution utilities.
//!
//! External tools are invoked synchronously with inherited stdio: their
//! diagnostic output goes straight to the user's terminal, unwrapped and
//! untranslated. Only the exit status is observed.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Builder for a single planned external tool invocation.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Set the working directory.
    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    /// Get the program path.
    pub fn get_program(&self) -> &Path {
        &self.program
    }

    /// Get the arguments.
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Run the command with inherited stdio and wait for its exit status.
    pub fn status(&self) -> io::Result<ExitStatus> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(ref cwd) = self.cwd {
            cmd.current_dir(cwd);
        }

        cmd.status()
    }

    /// Display the command for log and error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Observed outcome of an external tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecStatus {
    code: Option<i32>,
}

impl ExecStatus {
    /// Whether the tool exited with status zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// The exit code, if the process exited normally.
    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl From<ExitStatus> for ExecStatus {
    fn from(status: ExitStatus) -> Self {
        ExecStatus {
            code: status.code(),
        }
    }
}

#[cfg(test)]
impl ExecStatus {
    /// Construct a status from a raw exit code (mocks only).
    pub fn from_code(code: i32) -> Self {
        ExecStatus { code: Some(code) }
    }
}

/// Executes planned invocations.
///
/// The single seam between the orchestration and the operating system;
/// tests substitute a recording mock.
pub trait Executor {
    /// Run the command to completion, returning its observed status.
    fn run(&mut self, cmd: &ProcessBuilder) -> io::Result<ExecStatus>;
}

/// Executor backed by real child processes.
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        SystemExecutor
    }
}

impl Executor for SystemExecutor {
    fn run(&mut self, cmd: &ProcessBuilder) -> io::Result<ExecStatus> {
        tracing::debug!("running `{}`", cmd.display_command());
        let status = cmd.status()?;
        tracing::debug!("`{}` exited with {:?}", cmd.display_command(), status.code());
        Ok(status.into())
    }
}
