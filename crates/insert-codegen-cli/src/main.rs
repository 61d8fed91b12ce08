//! insert-codegen CLI — prints the unrolled levels of an incremental Merkle
//! insertion with Poseidon empty-subtree constants.
//!
//! With no arguments it writes the 20 default blocks to stdout, ready to paste
//! into the contract's insert function. Status and log output go to stderr.

mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "insert-codegen",
    about = "Generate unrolled incremental Merkle insertion code with Poseidon empty-subtree constants",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to an insert-codegen.config.json with depth/constant/template overrides
    #[arg(long, global = true, env = "INSERT_CODEGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Expand the insertion template for every level (default)
    Generate(GenerateArgs),

    /// List the empty-subtree constant table
    Zeroes {
        /// Print a JSON array instead of one level per line
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    InitConfig {
        /// Destination (default: ./insert-codegen.config.json)
        path: Option<PathBuf>,
    },

    /// Show the insertion path of a leaf index through the generated code
    Path {
        /// Leaf index
        index: u64,

        /// Tree depth (default: config depth, else 20)
        #[arg(long)]
        depth: Option<usize>,

        /// Print the steps as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Generate(GenerateArgs::default())
    }
}

#[derive(Args, Default, Debug, PartialEq)]
pub struct GenerateArgs {
    /// Number of levels to generate
    #[arg(long)]
    pub depth: Option<usize>,

    /// Template file with $index$ and $zero$ markers
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Accept templates without $index$ or $zero$
    #[arg(long)]
    pub allow_missing_markers: bool,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout carries generated code only
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or_default() {
        Commands::Generate(args) => {
            commands::generate::run(cli.config.as_deref(), &args)?;
        }
        Commands::Zeroes { json } => {
            commands::zeroes::run(cli.config.as_deref(), json)?;
        }
        Commands::InitConfig { path } => {
            commands::init_config::run(path.as_deref())?;
        }
        Commands::Path { index, depth, json } => {
            commands::path::run(cli.config.as_deref(), index, depth, json)?;
        }
    }

    Ok(())
}
