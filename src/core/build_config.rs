//! Build configuration variants.
//!
//! A build configuration names a variant of compilation settings and is
//! passed to the dependency manager as its `build_type` setting. The set
//! of variants mirrors Conan's settings schema, so every value here is
//! accepted by `--settings=build_type=...` verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named build variant, resolved independently by the dependency manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildConfig {
    #[serde(alias = "debug")]
    Debug,
    #[serde(alias = "release")]
    Release,
    #[serde(alias = "relwithdebinfo")]
    RelWithDebInfo,
    #[serde(alias = "minsizerel")]
    MinSizeRel,
}

impl BuildConfig {
    /// The `build_type` setting value understood by the dependency manager.
    pub fn as_setting(&self) -> &'static str {
        match self {
            BuildConfig::Debug => "Debug",
            BuildConfig::Release => "Release",
            BuildConfig::RelWithDebInfo => "RelWithDebInfo",
            BuildConfig::MinSizeRel => "MinSizeRel",
        }
    }

    /// The fixed sequence resolved by a full setup run: Debug, then Release.
    ///
    /// Both must complete before project generation starts; the passes are
    /// otherwise independent.
    pub fn default_sequence() -> Vec<BuildConfig> {
        vec![BuildConfig::Debug, BuildConfig::Release]
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_setting())
    }
}

impl std::str::FromStr for BuildConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(BuildConfig::Debug),
            "release" => Ok(BuildConfig::Release),
            "relwithdebinfo" => Ok(BuildConfig::RelWithDebInfo),
            "minsizerel" => Ok(BuildConfig::MinSizeRel),
            _ => Err(format!(
                "invalid build configuration '{}'; expected 'Debug', 'Release', 'RelWithDebInfo', or 'MinSizeRel'",
                s
            )),
        }
    }
}
