//! User-friendly diagnostic messages.
//!
//! Every fatal error carries its root cause plus a suggested fix. External
//! tool output is never rewritten; diagnostics only add Slipway's own
//! framing after the tool's raw output.

use std::fmt;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when the dependency manager is missing.
    pub const INSTALL_CONAN: &str = "help: install Conan 2.x, e.g. `pip install conan`";

    /// Suggestion when the project generator is missing.
    pub const INSTALL_PREMAKE: &str =
        "help: install premake5 from https://premake.github.io and put it on PATH";

    /// Suggestion when any other required tool is missing.
    pub const RUN_DOCTOR: &str = "help: run `slipway doctor` to check the build environment";

    /// Suggestion when no dependency manifest is found.
    pub const NO_MANIFEST: &str =
        "help: run from inside the SDK checkout (the directory containing conanfile.py)";

    /// Suggestion when the generator script is absent.
    pub const NO_GENERATOR_SCRIPT: &str =
        "help: generation needs the premake5.lua checked in at the project root";

    /// Suggestion when profile detection fails.
    pub const PROFILE_FAILED: &str =
        "help: a profile may already exist; the tool's output above says why it stopped";

    /// Suggestion when dependency resolution fails.
    pub const RESOLUTION_FAILED: &str =
        "help: the dependency manager's output above has the failing package; rerun after fixing it";

    /// Suggestion when project generation fails.
    pub const GENERATION_FAILED: &str =
        "help: the generator's output above names the failing script line";

    /// Suggestion for hosts outside the recognized mapping.
    pub const UNSUPPORTED_HOST: &str =
        "help: pass an explicit generator flavor with `--flavor <token>` (e.g. --flavor gmake2)";
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A structured, user-facing message: root cause, context, suggested fixes.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    contexts: Vec<String>,
    suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create an error-severity diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: message.into(),
            contexts: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Create a warning-severity diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
            contexts: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Attach a line of context.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.contexts.push(context.into());
        self
    }

    /// Attach a suggested fix. Suggestions already prefixed with `help:`
    /// are rendered as-is.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// The severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The root cause message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for context in &self.contexts {
            write!(f, "\n  note: {}", context)?;
        }
        for suggestion in &self.suggestions {
            if suggestion.starts_with("help:") {
                write!(f, "\n  {}", suggestion)?;
            } else {
                write!(f, "\n  help: {}", suggestion)?;
            }
        }
        Ok(())
    }
}
