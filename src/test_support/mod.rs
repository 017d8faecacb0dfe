//! Test utilities and mocks for Slipway unit tests.
//!
//! Provides a mock process executor that records external tool
//! invocations instead of spawning them, plus small project fixtures.
//!
//! # Example
//!
//! ```rust,ignore
//! use slipway::test_support::{MockExecutor, MockOutcome};
//!
//! let mut exec = MockExecutor::new();
//! exec.expect("conan install", MockOutcome::Status(1));
//!
//! // Drive an op with the mock, then inspect exec.calls()...
//! ```

use std::io;
use std::path::Path;

use crate::core::project::Project;
use crate::util::process::{ExecStatus, Executor, ProcessBuilder};

/// Outcome a mock invocation should produce.
#[derive(Debug, Clone, Copy)]
pub enum MockOutcome {
    /// Process ran and exited with this code.
    Status(i32),
    /// Binary missing: spawn fails with `io::ErrorKind::NotFound`.
    NotFound,
}

/// A prefix-matched expectation.
#[derive(Debug, Clone)]
struct Expectation {
    prefix: String,
    outcome: MockOutcome,
}

/// Mock executor that records commands without running them.
///
/// Commands are matched against expectations by prefix of the rendered
/// command line; unmatched commands succeed with exit code 0 so tests
/// only declare the interesting cases.
#[derive(Debug, Default)]
pub struct MockExecutor {
    expectations: Vec<Expectation>,
    calls: Vec<String>,
}

impl MockExecutor {
    /// Create a new mock executor where every command succeeds.
    pub fn new() -> Self {
        MockExecutor::default()
    }

    /// Add an expectation for commands starting with `prefix`.
    ///
    /// The first matching expectation wins.
    pub fn expect(&mut self, prefix: &str, outcome: MockOutcome) -> &mut Self {
        self.expectations.push(Expectation {
            prefix: prefix.to_string(),
            outcome,
        });
        self
    }

    /// The rendered command lines, in invocation order.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

impl Executor for MockExecutor {
    fn run(&mut self, cmd: &ProcessBuilder) -> io::Result<ExecStatus> {
        let rendered = cmd.display_command();

        let outcome = self
            .expectations
            .iter()
            .find(|e| rendered.starts_with(&e.prefix))
            .map(|e| e.outcome)
            .unwrap_or(MockOutcome::Status(0));

        match outcome {
            MockOutcome::NotFound => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("mock: no such tool `{}`", cmd.get_program().display()),
            )),
            MockOutcome::Status(code) => {
                self.calls.push(rendered);
                Ok(ExecStatus::from_code(code))
            }
        }
    }
}

/// Write a minimal SDK checkout (manifest + generator script) into `dir`
/// and locate it.
pub fn create_project(dir: &Path) -> Project {
    std::fs::write(
        dir.join("conanfile.py"),
        "from conan import ConanFile\n\nclass ServerSdk(ConanFile):\n    pass\n",
    )
    .unwrap();
    std::fs::write(dir.join("premake5.lua"), "workspace \"Server\"\n").unwrap();
    Project::locate(dir).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_calls_in_order() {
        let mut exec = MockExecutor::new();
        exec.run(&ProcessBuilder::new("conan").args(["profile", "detect"]))
            .unwrap();
        exec.run(&ProcessBuilder::new("premake5").arg("gmake2")).unwrap();

        assert_eq!(exec.calls(), ["conan profile detect", "premake5 gmake2"]);
    }

    #[test]
    fn test_first_matching_expectation_wins() {
        let mut exec = MockExecutor::new();
        exec.expect("conan install", MockOutcome::Status(3));
        exec.expect("conan", MockOutcome::Status(4));

        let status = exec
            .run(&ProcessBuilder::new("conan").args(["install", "."]))
            .unwrap();
        assert_eq!(status.code(), Some(3));

        let status = exec
            .run(&ProcessBuilder::new("conan").args(["profile", "detect"]))
            .unwrap();
        assert_eq!(status.code(), Some(4));
    }

    #[test]
    fn test_not_found_does_not_record_a_call() {
        let mut exec = MockExecutor::new();
        exec.expect("premake5", MockOutcome::NotFound);

        let err = exec.run(&ProcessBuilder::new("premake5").arg("vs2022")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(exec.calls().is_empty());
    }
}
