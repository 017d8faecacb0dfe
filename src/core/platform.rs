//! Host platform detection and generator flavor mapping.
//!
//! Build-file generation is platform-specific (solution files vs makefiles
//! vs IDE projects), so the host is classified exactly once and mapped to a
//! generator flavor through a pure total function. Everything downstream
//! receives the already-chosen flavor instead of re-querying the host.

use std::fmt;

use crate::core::errors::SetupError;

/// The detected host operating system family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPlatform {
    Linux,
    Windows,
    Macos,
    /// Anything outside the recognized families (BSDs, illumos, ...).
    Other(String),
}

impl HostPlatform {
    /// Detect the host platform from the execution environment.
    pub fn detect() -> Self {
        Self::from_os_str(std::env::consts::OS)
    }

    /// Classify an OS name as reported by `std::env::consts::OS`.
    pub fn from_os_str(os: &str) -> Self {
        match os {
            "linux" => HostPlatform::Linux,
            "windows" => HostPlatform::Windows,
            "macos" => HostPlatform::Macos,
            other => HostPlatform::Other(other.to_string()),
        }
    }

    /// The OS name this platform was classified from.
    pub fn as_str(&self) -> &str {
        match self {
            HostPlatform::Linux => "linux",
            HostPlatform::Windows => "windows",
            HostPlatform::Macos => "macos",
            HostPlatform::Other(os) => os,
        }
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The action token passed to the project generator.
///
/// The known variants cover the three recognized host families; `Other`
/// carries any further action token the generator itself understands
/// (e.g. `vs2019`), used when the flavor is overridden explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorFlavor {
    /// POSIX makefiles (`gmake2`).
    Gmake2,
    /// Visual Studio 2022 solution (`vs2022`).
    Vs2022,
    /// Xcode project (`xcode4`).
    Xcode4,
    /// Any other action token, validated by the generator itself.
    Other(String),
}

impl GeneratorFlavor {
    /// Map a host platform to its generator flavor.
    ///
    /// The mapping is pure and total over the recognized families. An
    /// unrecognized host is an explicit error rather than a silent no-op;
    /// an explicit `--flavor` override is the escape hatch for hosts the
    /// generator supports but this mapping does not know about.
    pub fn for_host(host: &HostPlatform) -> Result<Self, SetupError> {
        match host {
            HostPlatform::Linux => Ok(GeneratorFlavor::Gmake2),
            HostPlatform::Windows => Ok(GeneratorFlavor::Vs2022),
            HostPlatform::Macos => Ok(GeneratorFlavor::Xcode4),
            HostPlatform::Other(os) => Err(SetupError::UnsupportedPlatform { os: os.clone() }),
        }
    }

    /// The action token as passed on the generator command line.
    pub fn as_token(&self) -> &str {
        match self {
            GeneratorFlavor::Gmake2 => "gmake2",
            GeneratorFlavor::Vs2022 => "vs2022",
            GeneratorFlavor::Xcode4 => "xcode4",
            GeneratorFlavor::Other(token) => token,
        }
    }
}

impl fmt::Display for GeneratorFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_token())
    }
}

impl std::str::FromStr for GeneratorFlavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("generator flavor must not be empty".to_string());
        }
        Ok(match s {
            "gmake2" => GeneratorFlavor::Gmake2,
            "vs2022" => GeneratorFlavor::Vs2022,
            "xcode4" => GeneratorFlavor::Xcode4,
            other => GeneratorFlavor::Other(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_families() {
        assert_eq!(HostPlatform::from_os_str("linux"), HostPlatform::Linux);
        assert_eq!(HostPlatform::from_os_str("windows"), HostPlatform::Windows);
        assert_eq!(HostPlatform::from_os_str("macos"), HostPlatform::Macos);
        assert_eq!(
            HostPlatform::from_os_str("freebsd"),
            HostPlatform::Other("freebsd".to_string())
        );
    }

    #[test]
    fn test_mapping_is_deterministic() {
        for host in [HostPlatform::Linux, HostPlatform::Windows, HostPlatform::Macos] {
            let first = GeneratorFlavor::for_host(&host).unwrap();
            let second = GeneratorFlavor::for_host(&host).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_mapping_tokens() {
        assert_eq!(
            GeneratorFlavor::for_host(&HostPlatform::Linux).unwrap().as_token(),
            "gmake2"
        );
        assert_eq!(
            GeneratorFlavor::for_host(&HostPlatform::Windows).unwrap().as_token(),
            "vs2022"
        );
        assert_eq!(
            GeneratorFlavor::for_host(&HostPlatform::Macos).unwrap().as_token(),
            "xcode4"
        );
    }

    #[test]
    fn test_unrecognized_host_is_an_error() {
        let host = HostPlatform::Other("openbsd".to_string());
        let err = GeneratorFlavor::for_host(&host).unwrap_err();
        assert!(matches!(err, SetupError::UnsupportedPlatform { ref os } if os == "openbsd"));
    }

    #[test]
    fn test_flavor_parse() {
        assert_eq!("gmake2".parse::<GeneratorFlavor>().unwrap(), GeneratorFlavor::Gmake2);
        assert_eq!(
            "vs2019".parse::<GeneratorFlavor>().unwrap(),
            GeneratorFlavor::Other("vs2019".to_string())
        );
        assert!("".parse::<GeneratorFlavor>().is_err());
    }
}
