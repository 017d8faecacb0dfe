//! SDK project layout.
//!
//! A project is identified by its checked-in dependency manifest
//! (`conanfile.py` or `conanfile.txt`). The manifest and the generator
//! script next to it are static inputs owned by the repository; Slipway
//! reads their locations and never writes either file.

use std::path::{Path, PathBuf};

use crate::core::errors::SetupError;

/// Dependency manifest file names, in precedence order.
const MANIFEST_NAMES: [&str; 2] = ["conanfile.py", "conanfile.txt"];

/// Generator script consumed by the project generator.
const GENERATOR_SCRIPT: &str = "premake5.lua";

/// Folder the manifest declares for generator integration files.
const PACKAGES_DIR: &str = "packages";

/// A located SDK checkout.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    manifest: PathBuf,
    generator_script: Option<PathBuf>,
}

impl Project {
    /// Locate the project by searching upward from `start` for a
    /// dependency manifest.
    ///
    /// The directory containing the manifest becomes the project root.
    /// A `conanfile.py` takes precedence over a `conanfile.txt` in the
    /// same directory, matching the dependency manager's own precedence.
    pub fn locate(start: &Path) -> Result<Self, SetupError> {
        let mut current = start.to_path_buf();
        loop {
            if let Some(manifest) = find_manifest_in(&current) {
                return Ok(Project::at(current, manifest));
            }
            if !current.pop() {
                return Err(SetupError::ProjectNotFound {
                    dir: start.to_path_buf(),
                });
            }
        }
    }

    fn at(root: PathBuf, manifest: PathBuf) -> Self {
        let script = root.join(GENERATOR_SCRIPT);
        let generator_script = script.exists().then_some(script);
        Project {
            root,
            manifest,
            generator_script,
        }
    }

    /// The project root directory (where the manifest lives).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The dependency manifest path.
    pub fn manifest(&self) -> &Path {
        &self.manifest
    }

    /// The generator script path, if one is present.
    pub fn generator_script(&self) -> Option<&Path> {
        self.generator_script.as_deref()
    }

    /// The folder the manifest declares for generator integration files.
    pub fn packages_dir(&self) -> PathBuf {
        self.root.join(PACKAGES_DIR)
    }
}

fn find_manifest_in(dir: &Path) -> Option<PathBuf> {
    MANIFEST_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}
