//! Slipway - a build-environment bootstrapper for native C++ SDKs
//!
//! This crate provides the core library functionality for Slipway,
//! including toolchain profile initialization, per-configuration
//! dependency resolution, and platform-aware project generation.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and mocks for Slipway unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a mock process executor that records
/// external tool invocations instead of spawning them.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    build_config::BuildConfig,
    errors::SetupError,
    platform::{GeneratorFlavor, HostPlatform},
    project::Project,
};

pub use crate::util::context::GlobalContext;
