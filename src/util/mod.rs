//! Shared utilities

pub mod config;
pub mod context;
pub mod diagnostic;
pub mod process;
pub mod shell;

pub use config::Config;
pub use context::GlobalContext;
pub use diagnostic::Diagnostic;
pub use process::{Executor, ProcessBuilder, SystemExecutor};
pub use shell::Shell;
