//! Environment and tool health checks.
//!
//! The `doctor` command performs fast environment checks to verify that
//! the external tools the setup sequence depends on are available.
//!
//! ## Checks Performed
//!
//! - Dependency manager (conan) - required
//! - Project generator (premake5) - required
//! - CMake - optional; the manifest's tool requirement for packages built
//!   from source
//! - Git - optional; used by dependency recipes that fetch sources

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::ops::Tools;

/// Result of a single health check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check
    pub name: String,

    /// Whether the check passed
    pub passed: bool,

    /// Human-readable status message
    pub message: String,

    /// Path to the tool (if applicable)
    pub path: Option<PathBuf>,

    /// Version string (if applicable)
    pub version: Option<String>,

    /// How long the check took
    pub duration: Duration,

    /// Whether this check is required or optional
    pub required: bool,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: true,
            message: message.into(),
            path: None,
            version: None,
            duration: Duration::ZERO,
            required: true,
        }
    }

    /// Create a failing check result.
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: false,
            message: message.into(),
            path: None,
            version: None,
            duration: Duration::ZERO,
            required: true,
        }
    }

    /// Mark this check as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the tool path.
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    /// Set the version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Summary of all health checks.
#[derive(Debug, Clone, Default)]
pub struct DoctorReport {
    /// Individual check results
    pub checks: Vec<CheckResult>,

    /// Total time taken
    pub total_duration: Duration,

    /// Environment information
    pub environment: HashMap<String, String>,
}

impl DoctorReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        DoctorReport::default()
    }

    /// Add a check result.
    pub fn add(&mut self, check: CheckResult) {
        self.checks.push(check);
    }

    /// Check if all required checks passed.
    pub fn all_required_passed(&self) -> bool {
        self.checks.iter().filter(|c| c.required).all(|c| c.passed)
    }

    /// Get the count of passed checks.
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Get the count of failed checks.
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }

    /// Get the count of required failed checks.
    pub fn required_failed_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.required && !c.passed)
            .count()
    }
}

/// Options for the doctor command.
#[derive(Debug, Clone, Default)]
pub struct DoctorOptions {
    /// Include verbose output
    pub verbose: bool,
}

/// Run the doctor command.
pub fn doctor(tools: &Tools, _options: DoctorOptions) -> Result<DoctorReport> {
    let start = Instant::now();
    let mut report = DoctorReport::new();

    report
        .environment
        .insert("os".to_string(), std::env::consts::OS.to_string());
    report
        .environment
        .insert("arch".to_string(), std::env::consts::ARCH.to_string());

    report.add(check_tool("Dependency Manager", &tools.conan, true));
    report.add(check_tool("Project Generator", &tools.premake, true));
    report.add(check_tool("CMake", Path::new("cmake"), false));
    report.add(check_tool("Git", Path::new("git"), false));

    report.total_duration = start.elapsed();
    Ok(report)
}

/// Check that a tool resolves to a binary and report its version.
fn check_tool(name: &str, program: &Path, required: bool) -> CheckResult {
    let start = Instant::now();

    let resolved = resolve_program(program);
    let path = match resolved {
        Some(path) => path,
        None => {
            let result = CheckResult::fail(
                name,
                format!("`{}` not found on PATH", program.display()),
            )
            .with_duration(start.elapsed());
            return if required { result } else { result.optional() };
        }
    };

    let mut result = CheckResult::pass(name, format!("Found {}", program.display()))
        .with_path(path.clone());
    if let Some(version) = probe_version(&path) {
        result = result.with_version(version);
    }
    result = result.with_duration(start.elapsed());

    if required {
        result
    } else {
        result.optional()
    }
}

/// Resolve a configured program to a concrete binary path.
fn resolve_program(program: &Path) -> Option<PathBuf> {
    if program.components().count() > 1 {
        // explicit path from config: take it as-is
        return program.is_file().then(|| program.to_path_buf());
    }
    which::which(program).ok()
}

/// Run `<tool> --version` and keep the first meaningful output line.
fn probe_version(path: &Path) -> Option<String> {
    let output = Command::new(path).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }

    let text = if output.stdout.is_empty() {
        String::from_utf8_lossy(&output.stderr).into_owned()
    } else {
        String::from_utf8_lossy(&output.stdout).into_owned()
    };

    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Format the doctor report for display.
pub fn format_report(report: &DoctorReport, verbose: bool) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    writeln!(output, "Slipway Doctor").unwrap();
    writeln!(output, "==============\n").unwrap();

    if verbose {
        writeln!(output, "Environment:").unwrap();
        writeln!(
            output,
            "  OS: {} ({})",
            report
                .environment
                .get("os")
                .unwrap_or(&"unknown".to_string()),
            report
                .environment
                .get("arch")
                .unwrap_or(&"unknown".to_string())
        )
        .unwrap();
        writeln!(output).unwrap();
    }

    writeln!(output, "Checks:").unwrap();
    for check in &report.checks {
        let status = if check.passed { "[OK]" } else { "[!!]" };
        let required = if check.required { "" } else { " (optional)" };

        writeln!(output, "  {} {}{}", status, check.name, required).unwrap();

        if verbose {
            writeln!(output, "      {}", check.message).unwrap();
            if let Some(path) = &check.path {
                writeln!(output, "      Path: {}", path.display()).unwrap();
            }
            if let Some(version) = &check.version {
                writeln!(output, "      Version: {}", version).unwrap();
            }
        }
    }

    writeln!(output).unwrap();

    let passed = report.passed_count();
    let failed = report.failed_count();
    let required_failed = report.required_failed_count();

    writeln!(output, "Summary: {} passed, {} failed", passed, failed).unwrap();

    if required_failed > 0 {
        writeln!(
            output,
            "\nWarning: {} required check(s) failed. `slipway setup` will not succeed.",
            required_failed
        )
        .unwrap();
    } else if failed > 0 {
        writeln!(
            output,
            "\nAll required checks passed. {} optional check(s) failed.",
            failed
        )
        .unwrap();
    } else {
        writeln!(output, "\nAll checks passed. Slipway is ready to use.").unwrap();
    }

    output
}
