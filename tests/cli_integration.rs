//! CLI integration tests for Slipway.
//!
//! These tests drive the real binary against stub `conan` and `premake5`
//! executables placed at the front of PATH. The stubs append their
//! invocation to a log file and exit with a fixed code, so each test can
//! assert exactly which external tools ran, in which order.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use slipway::{GeneratorFlavor, HostPlatform};

/// Get the slipway binary command.
fn slipway() -> Command {
    Command::cargo_bin("slipway").unwrap()
}

/// Write a minimal SDK checkout into `dir`.
fn write_project(dir: &Path) {
    fs::write(dir.join("conanfile.py"), "from conan import ConanFile\n").unwrap();
    fs::write(dir.join("premake5.lua"), "workspace \"Server\"\n").unwrap();
}

/// A sandbox with a project checkout, stub tools, and a call log.
#[cfg(unix)]
struct Sandbox {
    _tmp: TempDir,
    project: PathBuf,
    log: PathBuf,
    path: String,
}

#[cfg(unix)]
impl Sandbox {
    /// Build a sandbox whose stub tools exit with the given codes.
    fn new(conan_exit: i32, premake_exit: i32) -> Self {
        let tmp = TempDir::new().unwrap();

        let project = tmp.path().join("sdk");
        fs::create_dir(&project).unwrap();
        write_project(&project);

        let bin = tmp.path().join("bin");
        fs::create_dir(&bin).unwrap();
        let log = tmp.path().join("calls.log");
        write_stub(&bin, "conan", &log, conan_exit);
        write_stub(&bin, "premake5", &log, premake_exit);

        let path = format!(
            "{}:{}",
            bin.display(),
            std::env::var("PATH").unwrap_or_default()
        );

        Sandbox {
            _tmp: tmp,
            project,
            log,
            path,
        }
    }

    fn command(&self) -> Command {
        let mut cmd = slipway();
        cmd.current_dir(&self.project).env("PATH", &self.path);
        cmd
    }

    fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Write a stub executable that logs its invocation and exits.
#[cfg(unix)]
fn write_stub(bin_dir: &Path, name: &str, log: &Path, exit_code: i32) {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        "#!/bin/sh\necho \"{} $@\" >> \"{}\"\nexit {}\n",
        name,
        log.display(),
        exit_code
    );
    let path = bin_dir.join(name);
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// The flavor token the host maps to, or None on unrecognized hosts.
fn host_flavor_token() -> Option<String> {
    GeneratorFlavor::for_host(&HostPlatform::detect())
        .ok()
        .map(|flavor| flavor.as_token().to_string())
}

// ============================================================================
// slipway setup
// ============================================================================

#[cfg(unix)]
#[test]
fn test_setup_resolves_each_config_then_generates() {
    let Some(flavor) = host_flavor_token() else {
        return;
    };
    let sandbox = Sandbox::new(0, 0);

    sandbox.command().arg("setup").assert().success();

    assert_eq!(
        sandbox.calls(),
        [
            "conan install . --build=missing --settings=build_type=Debug".to_string(),
            "conan install . --build=missing --settings=build_type=Release".to_string(),
            format!("premake5 {}", flavor),
        ]
    );
}

#[cfg(unix)]
#[test]
fn test_setup_profile_step_is_opt_in() {
    if host_flavor_token().is_none() {
        return;
    }
    let sandbox = Sandbox::new(0, 0);

    sandbox
        .command()
        .args(["setup", "--profile"])
        .assert()
        .success();

    let calls = sandbox.calls();
    assert_eq!(calls[0], "conan profile detect");
    assert_eq!(calls.len(), 4);
}

#[cfg(unix)]
#[test]
fn test_setup_fails_fast_when_resolution_fails() {
    if host_flavor_token().is_none() {
        return;
    }
    let sandbox = Sandbox::new(1, 0);

    sandbox
        .command()
        .arg("setup")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "dependency resolution for Debug failed",
        ));

    // the first install failed: no Release pass, no generator invocation
    assert_eq!(sandbox.calls().len(), 1);
}

#[cfg(unix)]
#[test]
fn test_setup_reports_generation_failure() {
    if host_flavor_token().is_none() {
        return;
    }
    let sandbox = Sandbox::new(0, 7);

    sandbox
        .command()
        .arg("setup")
        .assert()
        .failure()
        .stderr(predicate::str::contains("project generation failed"));

    // both resolution passes completed before the generator ran
    assert_eq!(sandbox.calls().len(), 3);
}

#[cfg(unix)]
#[test]
fn test_setup_honors_project_config() {
    let sandbox = Sandbox::new(0, 0);
    fs::write(
        sandbox.project.join("slipway.toml"),
        "[setup]\nconfigs = [\"Debug\"]\nprofile_init = true\n\n[generator]\nflavor = \"vs2019\"\n",
    )
    .unwrap();

    sandbox.command().arg("setup").assert().success();

    assert_eq!(
        sandbox.calls(),
        [
            "conan profile detect",
            "conan install . --build=missing --settings=build_type=Debug",
            "premake5 vs2019",
        ]
    );
}

#[test]
fn test_setup_outside_a_checkout_is_diagnosed() {
    let tmp = TempDir::new().unwrap();

    slipway()
        .arg("setup")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no dependency manifest"));
}

// ============================================================================
// slipway deps / generate / profile
// ============================================================================

#[cfg(unix)]
#[test]
fn test_deps_resolves_requested_config_only() {
    let sandbox = Sandbox::new(0, 0);

    sandbox
        .command()
        .args(["deps", "--config", "Release"])
        .assert()
        .success();

    assert_eq!(
        sandbox.calls(),
        ["conan install . --build=missing --settings=build_type=Release"]
    );
}

#[cfg(unix)]
#[test]
fn test_generate_honors_flavor_override() {
    let sandbox = Sandbox::new(0, 0);

    sandbox
        .command()
        .args(["generate", "--flavor", "vs2019"])
        .assert()
        .success();

    assert_eq!(sandbox.calls(), ["premake5 vs2019"]);
}

#[cfg(unix)]
#[test]
fn test_profile_runs_detect() {
    let sandbox = Sandbox::new(0, 0);

    sandbox.command().arg("profile").assert().success();

    assert_eq!(sandbox.calls(), ["conan profile detect"]);
}

#[cfg(unix)]
#[test]
fn test_missing_tool_fails_loudly() {
    let sandbox = Sandbox::new(0, 0);
    // drop the stub dir from PATH so conan cannot be found
    let empty = sandbox.project.join("empty-bin");
    fs::create_dir(&empty).unwrap();

    let mut cmd = slipway();
    cmd.current_dir(&sandbox.project)
        .env("PATH", empty.display().to_string());

    cmd.args(["deps", "--config", "Debug"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("`conan` not found on PATH"));

    assert!(sandbox.calls().is_empty());
}

// ============================================================================
// slipway doctor
// ============================================================================

#[cfg(unix)]
#[test]
fn test_doctor_passes_with_stub_tools() {
    let sandbox = Sandbox::new(0, 0);

    sandbox
        .command()
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] Dependency Manager"))
        .stdout(predicate::str::contains("[OK] Project Generator"));
}

#[cfg(unix)]
#[test]
fn test_doctor_fails_without_required_tools() {
    let tmp = TempDir::new().unwrap();
    let empty = tmp.path().join("empty-bin");
    fs::create_dir(&empty).unwrap();

    slipway()
        .arg("doctor")
        .current_dir(tmp.path())
        .env("PATH", empty.display().to_string())
        .assert()
        .failure()
        .stdout(predicate::str::contains("[!!] Dependency Manager"))
        .stdout(predicate::str::contains("required check(s) failed"));
}
