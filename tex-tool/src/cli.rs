//! Root CLI structure for tex-tool

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tex-tool")]
#[command(about = "Convert CM3D2 .tex textures to PNG and back", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Files or directories to convert when no subcommand is given
    pub paths: Vec<PathBuf>,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert .tex files to PNG and images to .tex
    Convert(ConvertArgs),

    /// Display information about a .tex file
    Info {
        /// Path to the .tex file
        file: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConvertArgs {
    /// Files or directories to convert. Directories are searched recursively
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Write outputs here instead of next to each input
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Number of worker threads (1 converts sequentially)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
}

impl ConvertArgs {
    /// Arguments for the bare `tex-tool <PATHS>...` form
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            ..Self::default()
        }
    }
}
