//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use starter::core::{ContractFramework, FrontendFramework};
use starter::ops::codegen::{DEFAULT_ARTIFACTS_DIR, DEFAULT_GENERATED_FILE, DEFAULT_SOURCE_DIR};
use starter::util::shell::ColorChoice;

/// Starter - scaffold web3 projects from contract and frontend templates
///
/// Run without a subcommand to create a project; missing choices are prompted for.
#[derive(Parser)]
#[command(name = "starter")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,

    /// Template root directory
    #[arg(long, global = true, env = "STARTER_TEMPLATES", value_name = "DIR")]
    pub templates: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub new: NewArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new project (the default when no subcommand is given)
    New(NewArgs),

    /// Print the contract artifacts the frontend code generator should include
    Includes(IncludesArgs),

    /// List the templates available under the template root
    Templates,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct NewArgs {
    /// Project name (prompted for when omitted)
    pub name: Option<String>,

    /// Smart contract framework: foundry, hardhat
    #[arg(long, value_name = "FRAMEWORK")]
    pub contracts: Option<ContractFramework>,

    /// Frontend framework: NEXT, VITE
    #[arg(long, value_name = "FRAMEWORK")]
    pub frontend: Option<FrontendFramework>,

    /// Build the project in a staging directory and move it into place on success
    #[arg(long)]
    pub staged: bool,

    /// Use configured defaults instead of prompting
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args, Debug, Clone)]
pub struct IncludesArgs {
    /// Contracts project directory
    #[arg(long, value_name = "DIR", default_value = "../contracts")]
    pub project: PathBuf,

    /// Contract sources, relative to the project
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SOURCE_DIR)]
    pub src: PathBuf,

    /// Compiled artifacts, relative to the project
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// Generated bindings file written by the code generator
    #[arg(long, value_name = "FILE", default_value = DEFAULT_GENERATED_FILE)]
    pub out: PathBuf,

    /// Print the full code generator configuration as JSON
    #[arg(long)]
    pub config: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,

    /// Write the script to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
