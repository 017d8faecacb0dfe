//! CLI definitions using clap.

use clap::{Args, Parser, Subcommand};

use slipway::core::build_config::BuildConfig;
use slipway::core::platform::GeneratorFlavor;
use slipway::util::shell::ColorChoice;

/// Slipway - a build-environment bootstrapper for native C++ SDKs
#[derive(Parser)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress status output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output mode (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prepare the full build environment: dependencies per configuration,
    /// then native build files for this host
    Setup(SetupArgs),

    /// Resolve third-party dependencies for one or more configurations
    Deps(DepsArgs),

    /// Generate native build files (makefiles, IDE solutions/projects)
    Generate(GenerateArgs),

    /// Ensure a dependency-manager toolchain profile exists
    Profile,

    /// Check that the required external tools are available
    Doctor(DoctorArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct SetupArgs {
    /// Run toolchain profile detection before resolving dependencies
    #[arg(long)]
    pub profile: bool,

    /// Build configurations to resolve, in order (defaults to Debug, Release)
    #[arg(long = "config", value_name = "CONFIG")]
    pub config: Vec<BuildConfig>,

    /// Generator flavor token, bypassing host detection (e.g. vs2019)
    #[arg(long, value_name = "FLAVOR")]
    pub flavor: Option<GeneratorFlavor>,
}

#[derive(Args)]
pub struct DepsArgs {
    /// Build configurations to resolve, in order (defaults to Debug, Release)
    #[arg(long = "config", value_name = "CONFIG")]
    pub config: Vec<BuildConfig>,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Generator flavor token, bypassing host detection (e.g. vs2019)
    #[arg(long, value_name = "FLAVOR")]
    pub flavor: Option<GeneratorFlavor>,
}

#[derive(Args)]
pub struct DoctorArgs {
    /// Show tool paths and versions
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
